pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod round;

    pub mod quadrature {
        pub mod quadratureerror;
        pub mod quadraturemethod;
        pub mod integrablefunction;
        pub mod interval;
        pub mod quadraturerule;
        pub mod trapezoidalrule;
        pub mod simpson13rule;
        pub mod simpson38rule;
        pub mod quadratureengine;
        pub mod methoddescriptor;
        pub mod methodregistry;
    }
}

pub mod presentation {
    pub mod calculationerror;
    pub mod mathsyntax;
    pub mod expression;
    pub mod inputvalidation;
    pub mod samplepoint;
    pub mod sampler;
    pub mod explanation;
    pub mod presets;
    pub mod calculationreport;
    pub mod calculationsession;
}
