use std::collections::HashMap;
use std::fs::File;
use std::hash::Hash;
use std::io::BufReader;

use super::managererror::{parse_json_value, ManagerError};

// ─────────────────────────────────────────────────────────────────────────────
// IManager：唯讀查詢介面
// ─────────────────────────────────────────────────────────────────────────────

pub trait IManager<K, V>
where
    K: Eq + Hash + 'static,
    V: 'static,
{
    fn map(&self) -> &HashMap<K, V>;

    fn get(&self, key: &K) -> Option<&V> {
        self.map().get(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.map().contains_key(key)
    }

    fn len(&self) -> usize {
        self.map().len()
    }

    fn is_empty(&self) -> bool {
        self.map().is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ManagerBuilder：載入階段（可寫），build() 之後凍結
// ─────────────────────────────────────────────────────────────────────────────

pub struct ManagerBuilder<K, V> {
    map: HashMap<K, V>,
    get_obj_from_json: fn(serde_json::Value) -> Result<(K, V), ManagerError>,
}

impl<K, V> ManagerBuilder<K, V>
where
    K: Eq + Hash,
{
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<(K, V), ManagerError>) -> ManagerBuilder<K, V> {
        ManagerBuilder {
            map: HashMap::new(),
            get_obj_from_json,
        }
    }

    /// 同 key 後寫入者覆蓋先前的值
    pub fn insert(&mut self, key: K, value: V) -> &mut Self {
        self.map.insert(key, value);
        self
    }

    pub fn insert_obj_from_json(&mut self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let (key, value) = (self.get_obj_from_json)(json_value)?;
        self.map.insert(key, value);
        Ok(())
    }

    pub fn insert_obj_from_json_vec(&mut self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    /// 檔案內容可以是單一物件或物件陣列
    pub fn from_reader(&mut self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = parse_json_value(json_value)?;
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }

    pub fn build(self) -> Manager<K, V> {
        Manager { map: self.map }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Manager：凍結後的唯讀容器
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Manager<K, V> {
    map: HashMap<K, V>,
}

impl<K, V> IManager<K, V> for Manager<K, V>
where
    K: Eq + Hash + 'static,
    V: 'static,
{
    fn map(&self) -> &HashMap<K, V> {
        &self.map
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Deserialize)]
    struct Entry {
        name: String,
        value: f64,
    }

    fn entry_from_json(json_value: serde_json::Value) -> Result<(String, f64), ManagerError> {
        let entry: Entry = parse_json_value(json_value)?;
        Ok((entry.name, entry.value))
    }

    #[test]
    fn later_insertions_override_earlier_ones() {
        let mut builder = ManagerBuilder::new(entry_from_json);
        builder.insert("h".to_owned(), 0.5);
        builder
            .insert_obj_from_json_vec(&[json!({"name": "h", "value": 0.25}), json!({"name": "k", "value": 3.0})])
            .unwrap();
        let manager = builder.build();

        assert_eq!(manager.len(), 2);
        assert_eq!(manager.get(&"h".to_owned()), Some(&0.25));
        assert!(manager.contains(&"k".to_owned()));
        assert!(!manager.contains(&"missing".to_owned()));
    }

    fn lookup<M: IManager<String, f64>>(manager: &M, key: &str) -> Option<f64> {
        manager.get(&key.to_owned()).copied()
    }

    #[test]
    fn default_reads_work_through_the_trait() {
        let mut builder = ManagerBuilder::new(entry_from_json);
        builder.insert("h".to_owned(), 0.5);
        let manager = builder.build();
        let reader: &dyn IManager<String, f64> = &manager;

        assert_eq!(lookup(&manager, "h"), Some(0.5));
        assert_eq!(reader.get(&"h".to_owned()), Some(&0.5));
        assert_eq!(lookup(&manager, "k"), None);
        assert!(!reader.is_empty());
    }

    #[test]
    fn malformed_object_is_a_json_error() {
        let mut builder = ManagerBuilder::new(entry_from_json);
        let err = builder.insert_obj_from_json(json!({"name": "h"})).unwrap_err();
        assert!(matches!(err, ManagerError::JsonParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut builder = ManagerBuilder::new(entry_from_json);
        let err = builder.from_reader("/nonexistent/compquad/entries.json").unwrap_err();
        assert!(matches!(err, ManagerError::Io(_)));
    }
}
