// ─────────────────────────────────────────────────────────────────────────────
// MathSyntax
// ─────────────────────────────────────────────────────────────────────────────
//
// 以數學慣例解析使用者輸入的運算式，再轉寫為完全加括號的 rhai 原始碼：
//   - 優先序（低 → 高）：+ -  <  * / %  <  一元 + -  <  ^
//   - `^` 為右結合，指數可帶一元負號：2^-1、2^3^2 = 2^9
//   - -x^2 = -(x^2)
//   - 數字一律為浮點數，1/2 = 0.5
//   - log(x) 為自然對數；log(x, b) 以 b 為底；log10(x) 以 10 為底
//   - 變數只有 x；常數 pi、e

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at position {position}")]
pub struct SyntaxError {
    pub position: usize,
    pub message: String,
}

impl SyntaxError {
    fn new(position: usize, message: impl Into<String>) -> SyntaxError {
        SyntaxError {
            position,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MathExpr {
    Number(f64),
    Variable,
    Constant(MathConstant),
    Negate(Box<MathExpr>),
    Binary(BinaryOp, Box<MathExpr>, Box<MathExpr>),
    Call(MathFunction, Vec<MathExpr>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathConstant {
    Pi,
    E,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Power,
}

impl BinaryOp {
    fn rhai_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Remainder => "%",
            BinaryOp::Power => "**",
        }
    }
}

/// 可呼叫的函數及其 rhai 對應名稱
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Sqrt,
    Abs,
    Floor,
    Ceil,
    Round,
    Ln,
    Log,
    Log10,
    Pow,
}

impl MathFunction {
    fn from_name(name: &str) -> Option<MathFunction> {
        let function = match name {
            "sin" => MathFunction::Sin,
            "cos" => MathFunction::Cos,
            "tan" => MathFunction::Tan,
            "asin" => MathFunction::Asin,
            "acos" => MathFunction::Acos,
            "atan" => MathFunction::Atan,
            "sinh" => MathFunction::Sinh,
            "cosh" => MathFunction::Cosh,
            "tanh" => MathFunction::Tanh,
            "exp" => MathFunction::Exp,
            "sqrt" => MathFunction::Sqrt,
            "abs" => MathFunction::Abs,
            "floor" => MathFunction::Floor,
            "ceil" => MathFunction::Ceil,
            "round" => MathFunction::Round,
            "ln" => MathFunction::Ln,
            "log" => MathFunction::Log,
            "log10" => MathFunction::Log10,
            "pow" => MathFunction::Pow,
            _ => return None,
        };
        Some(function)
    }

    fn accepts(self, arity: usize) -> bool {
        match self {
            MathFunction::Log | MathFunction::Atan => arity == 1 || arity == 2,
            MathFunction::Pow => arity == 2,
            _ => arity == 1,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 詞法
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Identifier(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LeftParen,
    RightParen,
    Comma,
}

fn tokenize(source: &str) -> Result<Vec<(usize, Token)>, SyntaxError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let start = i;
        let token = match c {
            _ if c.is_whitespace() => {
                i += 1;
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '^' => Token::Caret,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            ',' => Token::Comma,
            _ if c.is_ascii_digit() || c == '.' => {
                i = scan_number(&chars, i);
                let text: String = chars[start..i].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| SyntaxError::new(start, format!("invalid number '{text}'")))?;
                tokens.push((start, Token::Number(value)));
                continue;
            }
            _ if c.is_ascii_alphabetic() || c == '_' => {
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push((start, Token::Identifier(chars[start..i].iter().collect())));
                continue;
            }
            _ => return Err(SyntaxError::new(start, format!("unexpected character '{c}'"))),
        };
        tokens.push((start, token));
        i += 1;
    }
    Ok(tokens)
}

/// 數字：整數部、小數部、可選的指數（1e-3）；回傳結束位置
fn scan_number(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            i = j;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }
    }
    i
}

// ─────────────────────────────────────────────────────────────────────────────
// 遞迴下降
// ─────────────────────────────────────────────────────────────────────────────

struct Parser {
    tokens: Vec<(usize, Token)>,
    cursor: usize,
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor).map(|(_, token)| token)
    }

    fn position(&self) -> usize {
        self.tokens.get(self.cursor).map_or(self.end, |(position, _)| *position)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).map(|(_, token)| token.clone());
        self.cursor += 1;
        token
    }

    fn expect(&mut self, expected: Token, what: &str) -> Result<(), SyntaxError> {
        let position = self.position();
        match self.advance() {
            Some(token) if token == expected => Ok(()),
            _ => Err(SyntaxError::new(position, format!("expected {what}"))),
        }
    }

    fn additive(&mut self) -> Result<MathExpr, SyntaxError> {
        let mut lhs = self.multiplicative()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Subtract,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.multiplicative()?;
            lhs = MathExpr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn multiplicative(&mut self) -> Result<MathExpr, SyntaxError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Multiply,
                Some(Token::Slash) => BinaryOp::Divide,
                Some(Token::Percent) => BinaryOp::Remainder,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.unary()?;
            lhs = MathExpr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    // 一元負號低於 ^：-x^2 = -(x^2)
    fn unary(&mut self) -> Result<MathExpr, SyntaxError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                Ok(MathExpr::Negate(Box::new(self.unary()?)))
            }
            Some(Token::Plus) => {
                self.advance();
                self.unary()
            }
            _ => self.power(),
        }
    }

    // 右結合，指數可再帶一元符號：2^-1、2^3^2
    fn power(&mut self) -> Result<MathExpr, SyntaxError> {
        let base = self.primary()?;
        if self.peek() == Some(&Token::Caret) {
            self.advance();
            let exponent = self.unary()?;
            return Ok(MathExpr::Binary(BinaryOp::Power, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<MathExpr, SyntaxError> {
        let position = self.position();
        match self.advance() {
            Some(Token::Number(value)) => Ok(MathExpr::Number(value)),
            Some(Token::LeftParen) => {
                let inner = self.additive()?;
                self.expect(Token::RightParen, "')'")?;
                Ok(inner)
            }
            Some(Token::Identifier(name)) if self.peek() == Some(&Token::LeftParen) => {
                self.call(position, &name)
            }
            Some(Token::Identifier(name)) => match name.as_str() {
                "x" => Ok(MathExpr::Variable),
                "pi" => Ok(MathExpr::Constant(MathConstant::Pi)),
                "e" => Ok(MathExpr::Constant(MathConstant::E)),
                _ => Err(SyntaxError::new(position, format!("unknown variable '{name}'"))),
            },
            Some(_) => Err(SyntaxError::new(position, "unexpected token")),
            None => Err(SyntaxError::new(position, "unexpected end of expression")),
        }
    }

    fn call(&mut self, position: usize, name: &str) -> Result<MathExpr, SyntaxError> {
        let function = MathFunction::from_name(name)
            .ok_or_else(|| SyntaxError::new(position, format!("unknown function '{name}'")))?;
        self.expect(Token::LeftParen, "'('")?;
        let mut arguments = vec![self.additive()?];
        while self.peek() == Some(&Token::Comma) {
            self.advance();
            arguments.push(self.additive()?);
        }
        self.expect(Token::RightParen, "')'")?;
        if !function.accepts(arguments.len()) {
            return Err(SyntaxError::new(
                position,
                format!("{name} does not take {} argument(s)", arguments.len()),
            ));
        }
        Ok(MathExpr::Call(function, arguments))
    }
}

impl MathExpr {
    pub fn parse(source: &str) -> Result<MathExpr, SyntaxError> {
        let tokens = tokenize(source)?;
        if tokens.is_empty() {
            return Err(SyntaxError::new(0, "empty expression"));
        }
        let mut parser = Parser {
            tokens,
            cursor: 0,
            end: source.chars().count(),
        };
        let expr = parser.additive()?;
        if parser.peek().is_some() {
            return Err(SyntaxError::new(parser.position(), "unexpected token"));
        }
        Ok(expr)
    }

    /// 轉寫為 rhai 運算式。數字常值放入 `literals`，以 `lit{i}` 參照，
    /// 避免浮點數文字表示在 rhai 詞法中的差異。
    pub fn to_rhai(&self, literals: &mut Vec<f64>) -> String {
        match self {
            MathExpr::Number(value) => {
                literals.push(*value);
                format!("lit{}", literals.len() - 1)
            }
            MathExpr::Variable => "x".to_owned(),
            MathExpr::Constant(MathConstant::Pi) => "pi".to_owned(),
            MathExpr::Constant(MathConstant::E) => "e".to_owned(),
            MathExpr::Negate(inner) => format!("(-{})", inner.to_rhai(literals)),
            MathExpr::Binary(op, lhs, rhs) => {
                let lhs = lhs.to_rhai(literals);
                let rhs = rhs.to_rhai(literals);
                format!("({lhs} {} {rhs})", op.rhai_symbol())
            }
            MathExpr::Call(function, arguments) => {
                let arguments: Vec<String> = arguments.iter().map(|argument| argument.to_rhai(literals)).collect();
                match (function, arguments.as_slice()) {
                    (MathFunction::Pow, [base, exponent]) => format!("({base} ** {exponent})"),
                    // rhai 的 log(x) 以 10 為底
                    (MathFunction::Log, [value]) => format!("ln({value})"),
                    (MathFunction::Log, [value, base]) => format!("log({value}, {base})"),
                    (MathFunction::Log10, [value]) => format!("log({value})"),
                    _ => format!("{}({})", function.rhai_name(), arguments.join(", ")),
                }
            }
        }
    }
}

impl MathFunction {
    fn rhai_name(self) -> &'static str {
        match self {
            MathFunction::Sin => "sin",
            MathFunction::Cos => "cos",
            MathFunction::Tan => "tan",
            MathFunction::Asin => "asin",
            MathFunction::Acos => "acos",
            MathFunction::Atan => "atan",
            MathFunction::Sinh => "sinh",
            MathFunction::Cosh => "cosh",
            MathFunction::Tanh => "tanh",
            MathFunction::Exp => "exp",
            MathFunction::Sqrt => "sqrt",
            MathFunction::Abs => "abs",
            MathFunction::Floor => "floor",
            MathFunction::Ceil => "ceiling",
            MathFunction::Round => "round",
            MathFunction::Ln | MathFunction::Log => "ln",
            MathFunction::Log10 => "log",
            MathFunction::Pow => "pow",
        }
    }
}
