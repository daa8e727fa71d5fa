//! Integration tests for CLI commands

use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Helper to run chartlet command
fn chartlet(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_chartlet"))
        .args(args)
        .env_remove("CHARTLET_KUBE_VERSION")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute chartlet")
}

/// Get the fixture chart path
fn fixture_chart() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures/bq-mcp-server").to_string()
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Render the fixture and parse the manifest from stdout
fn render(extra: &[&str]) -> serde_yaml::Value {
    let chart = fixture_chart();
    let mut args = vec!["template", "prod", chart.as_str()];
    args.extend_from_slice(extra);

    let output = chartlet(&args);
    assert!(
        output.status.success(),
        "template failed: {}",
        stderr(&output)
    );
    serde_yaml::from_str(&stdout(&output)).expect("stdout should be a YAML manifest")
}

fn first_path(doc: &serde_yaml::Value) -> &serde_yaml::Value {
    &doc["spec"]["rules"][0]["http"]["paths"][0]
}

fn create_chart(values: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Chart.yaml"),
        "apiVersion: v2\nname: web\nversion: 1.0.0\n",
    )
    .unwrap();
    fs::write(dir.path().join("values.yaml"), values).unwrap();
    dir
}

mod template_command {
    use super::*;

    #[test]
    fn test_default_version_uses_stable_api() {
        let doc = render(&[]);

        assert_eq!(doc["apiVersion"], "networking.k8s.io/v1");
        assert_eq!(doc["kind"], "Ingress");
        assert_eq!(doc["metadata"]["name"], "prod-bq-mcp-server");
        assert_eq!(doc["spec"]["ingressClassName"], "traefik-v3-internal");
        assert_eq!(first_path(&doc)["pathType"], "ImplementationSpecific");
        assert_eq!(first_path(&doc)["backend"]["service"]["port"]["number"], 8080);
    }

    #[test]
    fn test_beta_version_injects_class_annotation() {
        let doc = render(&["--kube-version", "1.16.0"]);

        assert_eq!(doc["apiVersion"], "networking.k8s.io/v1beta1");
        assert_eq!(
            doc["metadata"]["annotations"]["kubernetes.io/ingress.class"],
            "traefik-v3-internal"
        );
        assert!(doc["spec"].get("ingressClassName").is_none());
        assert!(first_path(&doc).get("pathType").is_none());
    }

    #[test]
    fn test_legacy_version_uses_flat_backend() {
        let doc = render(&["--kube-version", "v1.13.0"]);

        assert_eq!(doc["apiVersion"], "extensions/v1beta1");
        assert_eq!(first_path(&doc)["backend"]["serviceName"], "prod-bq-mcp-server");
        assert_eq!(first_path(&doc)["backend"]["servicePort"], 8080);
    }

    #[test]
    fn test_values_file_and_set_layers() {
        let dir = TempDir::new().unwrap();
        let overrides = dir.path().join("prod.yaml");
        fs::write(
            &overrides,
            r#"
service:
  port: 9090
ingress:
  internal:
    hosts:
      - host: bq.prod.internal
        paths:
          - path: /sse
            pathType: Prefix
"#,
        )
        .unwrap();

        let doc = render(&[
            "-f",
            overrides.to_str().unwrap(),
            "--set",
            "service.port=9191",
        ]);

        let rules = doc["spec"]["rules"].as_sequence().unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0]["host"], "bq.prod.internal");
        assert_eq!(first_path(&doc)["path"], "/sse");
        assert_eq!(first_path(&doc)["backend"]["service"]["port"]["number"], 9191);
    }

    #[test]
    fn test_service_flags() {
        let doc = render(&["--service-name", "bq-api", "--service-port", "80"]);

        assert_eq!(first_path(&doc)["backend"]["service"]["name"], "bq-api");
        assert_eq!(first_path(&doc)["backend"]["service"]["port"]["number"], 80);
    }

    #[test]
    fn test_disabled_ingress_prints_nothing() {
        let output = chartlet(&[
            "template",
            "prod",
            &fixture_chart(),
            "--set",
            "ingress.internal.enabled=false",
        ]);

        assert!(output.status.success());
        assert!(stdout(&output).trim().is_empty());
    }

    #[test]
    fn test_malformed_version_fails_even_when_disabled() {
        let output = chartlet(&[
            "template",
            "prod",
            &fixture_chart(),
            "--set",
            "ingress.internal.enabled=false",
            "--kube-version",
            "one.two",
        ]);

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("one.two"));
    }

    #[test]
    fn test_missing_service_port() {
        let chart = create_chart(
            r#"
ingress:
  internal:
    enabled: true
    hosts:
      - host: web.internal
        paths:
          - path: /
"#,
        );

        let output = chartlet(&["template", "web", chart.path().to_str().unwrap()]);

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("service.port"));
    }

    #[test]
    fn test_strict_mode_rejects_path_type() {
        let output = chartlet(&[
            "template",
            "prod",
            &fixture_chart(),
            "--kube-version",
            "1.16.0",
            "--strict",
        ]);

        assert_eq!(output.status.code(), Some(3));
        assert!(stdout(&output).is_empty());
    }

    #[test]
    fn test_output_dir() {
        let out = TempDir::new().unwrap();
        let output = chartlet(&[
            "template",
            "prod",
            &fixture_chart(),
            "--output-dir",
            out.path().to_str().unwrap(),
        ]);

        assert!(output.status.success());
        let written = fs::read_to_string(out.path().join("ingress.yaml")).unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&written).unwrap();
        assert_eq!(doc["apiVersion"], "networking.k8s.io/v1");
    }

    #[test]
    fn test_missing_chart() {
        let output = chartlet(&["template", "prod", "/nonexistent/chart"]);
        assert_eq!(output.status.code(), Some(4));
    }

    #[test]
    fn test_zero_service_port_rejected() {
        let output = chartlet(&["template", "prod", &fixture_chart(), "--service-port", "0"]);

        assert_eq!(output.status.code(), Some(2));
        assert!(stdout(&output).is_empty());
    }

    #[test]
    fn test_invalid_chart_version_is_chart_error() {
        let chart = create_chart("a: 1\n");
        fs::write(chart.path().join("Chart.yaml"), "name: web\nversion: one\n").unwrap();

        let output = chartlet(&["template", "web", chart.path().to_str().unwrap()]);
        assert_eq!(output.status.code(), Some(4));

        fs::write(chart.path().join("Chart.yaml"), "name: [web\n").unwrap();
        let output = chartlet(&["template", "web", chart.path().to_str().unwrap()]);
        assert_eq!(output.status.code(), Some(4));
    }

    #[test]
    fn test_show_values_precede_manifest() {
        let chart = fixture_chart();
        let output = chartlet(&[
            "template",
            "prod",
            &chart,
            "--set",
            "service.port=9090",
            "--show-values",
        ]);

        assert!(output.status.success(), "template failed: {}", stderr(&output));
        let out = stdout(&output);
        let values_at = out.find("# Computed Values").expect("computed values header");
        let source_at = out.find("# Source: ingress.yaml").expect("manifest header");
        assert!(values_at < source_at);

        let computed = &out[values_at..source_at];
        assert!(computed.contains("port: 9090"));
        assert!(computed.contains("className: traefik-v3-internal"));
    }
}

mod lint_command {
    use super::*;

    #[test]
    fn test_lint_fixture() {
        let output = chartlet(&["lint", &fixture_chart()]);

        assert!(output.status.success(), "lint failed: {}", stdout(&output));
        let out = stdout(&output);
        assert!(out.contains("Chart.yaml is valid"));
        assert!(out.contains("networking.k8s.io/v1"));
        assert!(out.contains("Linting passed"));
    }

    #[test]
    fn test_lint_reports_unknown_keys() {
        let output = chartlet(&["lint", &fixture_chart(), "--set", "imagee.tag=v1"]);

        assert!(output.status.success());
        let out = stdout(&output);
        assert!(out.contains("imagee"));
        assert!(out.contains("warning"));
    }

    #[test]
    fn test_lint_strict_fails_on_warnings() {
        let output = chartlet(&[
            "lint",
            &fixture_chart(),
            "--set",
            "imagee.tag=v1",
            "--strict",
        ]);

        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn test_lint_reports_render_errors() {
        let output = chartlet(&[
            "lint",
            &fixture_chart(),
            "--set",
            "ingress.internal.hosts=[{\"host\":\"a\",\"paths\":[{\"path\":\"/\",\"pathType\":\"Regex\"}]}]",
        ]);

        assert!(!output.status.success());
        assert!(stdout(&output).contains("pathType"));
    }
}

mod show_command {
    use super::*;

    #[test]
    fn test_show_with_values() {
        let output = chartlet(&["show", &fixture_chart(), "--values"]);

        assert!(output.status.success());
        let out = stdout(&output);
        assert!(out.contains("bq-mcp-server"));
        assert!(out.contains("0.3.0"));
        assert!(out.contains("traefik-v3-internal"));
    }
}
