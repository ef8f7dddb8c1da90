use cf_macros::{guid, value_object};
use std::collections::HashSet;

#[guid]
struct QuotaGuid(String);

#[guid(debug = false)]
struct SecretGuid(String);

impl std::fmt::Debug for SecretGuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretGuid(..)")
    }
}

#[value_object]
struct Quota {
    name: String,
    memory_mb: u64,
}

fn main() {
    let g = QuotaGuid::new("q-1");
    assert_eq!(g.to_string(), "q-1");
    assert_eq!(g.as_str(), "q-1");
    assert!(!g.is_empty());
    assert!(QuotaGuid::default().is_empty());
    assert_eq!(g, "q-1".parse::<QuotaGuid>().unwrap());
    let mut set = HashSet::new();
    set.insert(g.clone());
    assert!(set.contains(&QuotaGuid::from("q-1")));

    let s = SecretGuid::from("hidden".to_string());
    assert_eq!(format!("{:?}", s), "SecretGuid(..)");

    let q = Quota::default();
    assert_eq!(q, q.clone());
}
