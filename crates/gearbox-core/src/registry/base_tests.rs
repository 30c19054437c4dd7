    use super::*;
    use crate::factory::FactoryTable;
    use serde_json::json;

    fn factory() -> Arc<dyn AdapterFactory> {
        let mut table = FactoryTable::new();
        table
            .register_configured("datamanager", "memory")
            .register_configured("datamanager", "session");
        Arc::new(table)
    }

    fn base_config() -> Settings {
        Settings::from([
            ("prefix".to_string(), json!("app")),
            ("async".to_string(), json!(false)),
        ])
    }

    fn core() -> RegistryCore {
        RegistryCore::new(RegistryKind::DataManager, factory(), base_config())
    }

    fn settings(value: serde_json::Value) -> Settings {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_new_core_is_empty() {
        let core = core();
        assert!(core.is_empty());
        assert_eq!(core.lib(), "datamanager");
        assert_eq!(core.collection_name(), "stores");
        assert_eq!(core.default_type(), "memory");
    }

    #[test]
    fn test_add_empty_is_noop() {
        let mut core = core();
        core.add(AdapterRequest::Empty);
        core.add(AdapterRequest::from(""));
        assert!(core.is_empty());
    }

    #[test]
    fn test_add_by_name_uses_defaults() {
        let mut core = core();
        core.add("users".into());

        assert_eq!(core.len(), 1);
        let adapter = core.get("users").unwrap();
        assert_eq!(adapter.name(), "users");
        assert_eq!(adapter.adapter_type(), "memory");
        assert_eq!(adapter.settings(), &base_config());
    }

    #[test]
    fn test_add_descriptor_merges_settings() {
        let mut core = core();
        core.add(
            AdapterDescriptor::new("tasks")
                .with_type("session")
                .with_settings(settings(json!({"prefix": "tasks", "ttl": 60})))
                .into(),
        );

        let adapter = core.get("tasks").unwrap();
        assert_eq!(adapter.adapter_type(), "session");
        assert_eq!(
            adapter.settings(),
            &settings(json!({"prefix": "tasks", "async": false, "ttl": 60}))
        );
        assert_eq!(core.config(), &base_config());
    }

    #[test]
    fn test_add_descriptor_falls_back_to_default_type() {
        let mut core = core();
        core.add(AdapterDescriptor::new("tasks").into());

        let adapter = core.get("tasks").unwrap();
        assert_eq!(adapter.adapter_type(), "memory");
        assert_eq!(adapter.settings(), &base_config());
    }

    #[test]
    fn test_add_descriptor_without_name_is_noop() {
        let mut core = core();
        core.add("users".into());
        core.add(AdapterDescriptor::default().with_type("session").into());

        assert_eq!(core.names(), vec!["users"]);
    }

    #[test]
    fn test_add_mixed_list_skips_nameless_items() {
        let mut core = core();
        core.add(AdapterRequest::from(vec![
            RequestItem::from("users"),
            AdapterDescriptor::default().with_type("session").into(),
            AdapterDescriptor::new("tasks").with_type("session").into(),
            RequestItem::from(""),
        ]));

        assert_eq!(core.names(), vec!["tasks", "users"]);
        assert_eq!(core.get("tasks").unwrap().adapter_type(), "session");
        assert_eq!(core.get("users").unwrap().adapter_type(), "memory");
    }

    #[test]
    fn test_add_same_name_overwrites() {
        let mut core = core();
        core.add("users".into());
        core.add(AdapterDescriptor::new("users").with_type("session").into());

        assert_eq!(core.len(), 1);
        assert_eq!(core.get("users").unwrap().adapter_type(), "session");
    }

    #[test]
    fn test_add_unknown_type_is_skipped() {
        let mut core = core();
        core.add(AdapterRequest::from(vec![
            RequestItem::from(AdapterDescriptor::new("cache").with_type("indexeddb")),
            RequestItem::from("users"),
        ]));

        assert_eq!(core.names(), vec!["users"]);
    }

    #[test]
    fn test_custom_default_type() {
        let mut core = core();
        core.set_default_type("session");
        core.add("users".into());
        assert_eq!(core.get("users").unwrap().adapter_type(), "session");
    }

    #[test]
    fn test_remove_after_add() {
        let mut core = core();
        core.add("users".into());
        core.remove(&"users".into());
        assert!(core.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut core = core();
        core.add("users".into());
        core.remove(&"missing".into());
        core.remove(&AdapterRequest::Empty);
        core.remove(&AdapterDescriptor::default().into());

        assert_eq!(core.names(), vec!["users"]);
    }

    #[test]
    fn test_remove_by_list_and_descriptor() {
        let mut core = core();
        core.add(AdapterRequest::from(["a", "b", "c", "d"]));

        core.remove(&AdapterRequest::from(vec![
            RequestItem::from("a"),
            AdapterDescriptor::new("b").with_type("ignored").into(),
        ]));
        core.remove(&AdapterDescriptor::new("c").into());

        assert_eq!(core.names(), vec!["d"]);
    }

    #[test]
    fn test_clear() {
        let mut core = core();
        core.add(AdapterRequest::from(["a", "b"]));
        core.clear();
        assert!(core.is_empty());
    }

    #[test]
    fn test_describe_sorted() {
        let mut core = core();
        core.add(AdapterRequest::from(["zeta", "alpha"]));

        let infos = core.describe();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].name, "alpha");
        assert_eq!(infos[0].adapter_type, "memory");
        assert_eq!(infos[1].name, "zeta");
    }

    #[test]
    fn test_iter() {
        let mut core = core();
        core.add(AdapterRequest::from(["a", "b"]));
        let items: Vec<_> = core.iter().collect();
        assert_eq!(items.len(), 2);
    }
