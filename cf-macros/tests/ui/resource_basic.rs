use cf_domain::guid::Guid;
use cf_domain::resource::Resource;
use cf_macros::resource;

#[resource(kind = "route")]
struct Route {
    host: String,
}

// 已声明的 guid/name 字段会被复用并移到最前
#[resource]
struct Domain {
    shared: bool,
    name: String,
}

fn main() {
    let route = Route {
        guid: Guid::from("route-guid"),
        name: "my-route".to_string(),
        host: "my-host".to_string(),
    };
    assert_eq!(Route::KIND, "route");
    assert_eq!(route.name(), "my-route");
    assert_eq!(route.guid().as_str(), "route-guid");
    let _ = format!("{:?}", route.clone());

    let domain = Domain::default();
    assert_eq!(Domain::KIND, "domain");
    assert!(domain.guid().is_empty());
    assert!(!domain.shared);
}
