use cf_macros::resource;

/// 应用；绑定只需其名称与 guid
#[resource(kind = "app")]
pub struct Application {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guid::Guid;
    use crate::resource::Resource;

    #[test]
    fn resource_fields_and_kind() {
        let app = Application {
            name: "my-app".into(),
            guid: Guid::from("my-app-guid"),
        };
        assert_eq!(Application::KIND, "app");
        assert_eq!(app.name(), "my-app");
        assert_eq!(app.guid().as_str(), "my-app-guid");
    }
}
