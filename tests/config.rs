// ABOUTME: Integration tests for configuration parsing and validation.
// ABOUTME: Tests YAML parsing, defaults, discovery and rejection of bad values.

use kubeprep::compat::CompatibilityTable;
use kubeprep::config::*;
use kubeprep::detect::{ContainerRuntimeKind, InitSystemKind};
use kubeprep::error::Error;
use kubeprep::ports::PortPolicy;
use std::path::PathBuf;
use std::time::Duration;

mod parsing {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.command_timeout, Duration::from_secs(60));
        assert_eq!(config.ports.policy, PortPolicy::MustBeFree);
        assert_eq!(config.ports.timeout, Duration::from_secs(1));
        assert_eq!(config.ports.node_port_range, PortRange::default());
        assert_eq!(config.sysctl.path, PathBuf::from("/etc/sysctl.d/k8s.conf"));
        assert_eq!(config.sysctl.apply_command.to_string(), "sysctl --system");
        assert_eq!(config.compatibility, CompatibilityTable::default());
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
host: 10.0.0.5
command_timeout: 2m

ports:
  policy: must-be-listening
  timeout: 250ms
  concurrency: 32
  control_plane: [6443, 2379]
  node_port_range: "30000-30010"

sysctl:
  path: /tmp/k8s.conf
  apply_command: ["sudo", "sysctl", "--system"]

compatibility:
  - runtime: containerd
    init: systemd
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.host, "10.0.0.5");
        assert_eq!(config.command_timeout, Duration::from_secs(120));
        assert_eq!(config.ports.policy, PortPolicy::MustBeListening);
        assert_eq!(config.ports.timeout, Duration::from_millis(250));
        assert_eq!(config.ports.concurrency, 32);
        assert_eq!(config.ports.control_plane, vec![6443, 2379]);
        assert_eq!(config.ports.node_port_range.len(), 11);
        assert_eq!(config.sysctl.path, PathBuf::from("/tmp/k8s.conf"));
        assert_eq!(
            config.sysctl.apply_command.to_string(),
            "sudo sysctl --system"
        );
        assert!(
            config
                .compatibility
                .is_compatible(ContainerRuntimeKind::Containerd, InitSystemKind::Systemd)
        );
        assert!(
            !config
                .compatibility
                .is_compatible(ContainerRuntimeKind::CriO, InitSystemKind::Systemd)
        );

        let scan = config.ports.scan(&config.host);
        assert_eq!(scan.ports.len(), 2 + 11);
        assert_eq!(scan.host, "10.0.0.5");
    }

    #[test]
    fn node_port_range_long_form() {
        let yaml = r#"
ports:
  node_port_range:
    start: 31000
    end: 31001
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(
            config.ports.node_port_range,
            PortRange {
                start: 31000,
                end: 31001
            }
        );
    }
}

mod validation {
    use super::*;

    fn invalid(yaml: &str) -> String {
        match Config::from_yaml(yaml) {
            Err(Error::InvalidConfig(msg)) => msg,
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn zero_concurrency_rejected() {
        assert!(invalid("ports:\n  concurrency: 0\n").contains("concurrency"));
    }

    #[test]
    fn zero_timeouts_rejected() {
        assert!(invalid("command_timeout: 0s\n").contains("command_timeout"));
        assert!(invalid("ports:\n  timeout: 0s\n").contains("ports.timeout"));
    }

    #[test]
    fn empty_compatibility_table_rejected() {
        assert!(invalid("compatibility: []\n").contains("compatibility"));
    }

    #[test]
    fn empty_host_rejected() {
        assert!(invalid("host: \"\"\n").contains("host"));
    }

    #[test]
    fn empty_apply_command_is_parse_error() {
        let err = Config::from_yaml("sysctl:\n  apply_command: []\n").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
        assert!(err.to_string().contains("command cannot be empty"));
    }

    #[test]
    fn reversed_port_range_is_parse_error() {
        let err = Config::from_yaml("ports:\n  node_port_range: \"32767-30000\"\n").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn unknown_fields_rejected() {
        let err = Config::from_yaml("hosts: 127.0.0.1\n").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn unknown_runtime_name_rejected() {
        let yaml = "compatibility:\n  - runtime: rkt\n    init: systemd\n";
        assert!(matches!(Config::from_yaml(yaml), Err(Error::Yaml(_))));
    }
}

mod discovery {
    use super::*;
    use std::fs;

    #[test]
    fn discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn discover_prefers_yml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "host: 10.0.0.1\n").unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME_ALT), "host: 10.0.0.2\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.host, "10.0.0.1");
    }

    #[test]
    fn discover_finds_dot_directory_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".kubeprep")).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME_DIR), "host: 10.0.0.3\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.host, "10.0.0.3");
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yml");

        match Config::load(&path) {
            Err(Error::ConfigNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }
}
