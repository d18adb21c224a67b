use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct CliTestEnv {
    _temp_dir: TempDir,
    home: PathBuf,
    xdg_config: PathBuf,
    xdg_state: PathBuf,
    work: PathBuf,
}

impl CliTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let home = base.join("home");
        let xdg_config = base.join("xdg-config");
        let xdg_state = base.join("xdg-state");
        let work = base.join("work");

        fs::create_dir_all(&home).expect("failed to create HOME");
        fs::create_dir_all(&xdg_config).expect("failed to create XDG_CONFIG_HOME");
        fs::create_dir_all(&xdg_state).expect("failed to create XDG_STATE_HOME");
        fs::create_dir_all(&work).expect("failed to create work dir");

        seed_catalog_fixture(&work);

        Self {
            _temp_dir: temp_dir,
            home,
            xdg_config,
            xdg_state,
            work,
        }
    }

    fn catalog(&self) -> String {
        self.work.join("categories.json").display().to_string()
    }

    fn write_config(&self, contents: &str) {
        let dir = self.xdg_config.join("wrapcard");
        fs::create_dir_all(&dir).expect("failed to create config dir");
        fs::write(dir.join("config.toml"), contents).expect("failed to write config");
    }
}

fn seed_catalog_fixture(work: &Path) {
    let source = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../wrapcard-core/tests/fixtures/categories.json");
    fs::copy(source, work.join("categories.json")).expect("failed to copy catalog fixture");
}

fn run(env: &CliTestEnv, args: &[&str]) -> Output {
    Command::new(PathBuf::from(assert_cmd::cargo::cargo_bin!("wrapcard")))
        .args(args)
        .env("HOME", &env.home)
        .env("XDG_CONFIG_HOME", &env.xdg_config)
        .env("XDG_STATE_HOME", &env.xdg_state)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute wrapcard: {e}"))
}

fn assert_success(args: &[&str], output: &Output) {
    if output.status.success() {
        return;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    panic!(
        "wrapcard {} failed\nstatus: {}\nstdout:\n{}\nstderr:\n{}",
        args.join(" "),
        output.status,
        stdout,
        stderr
    );
}

#[test]
fn text_export_renders_generic_card_with_placeholder() {
    let env = CliTestEnv::new();
    let catalog = env.catalog();
    let args = [
        "--category",
        catalog.as_str(),
        "--pick",
        "role",
        "--year",
        "2025",
        "--watermark",
        "WM",
    ];

    let output = run(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2025 WRAPPED"), "got:\n{stdout}");
    assert!(stdout.contains("Role of the Year"));
    assert!(stdout.contains("Developer"));
    assert!(stdout.contains("• • •   WM"));
}

#[test]
fn html_export_uses_set_values_and_user() {
    let env = CliTestEnv::new();
    let catalog = env.catalog();
    let args = [
        "--category",
        catalog.as_str(),
        "--pick",
        "albums",
        "--set",
        "album1=Kid A",
        "--set",
        "album4=Amnesiac",
        "--user",
        "jo",
        "--export",
        "html",
    ];

    let output = run(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<div id=\"wrapped-card-"));
    assert!(stdout.contains("data-layout=\"list\""));
    assert!(stdout.contains("<span class=\"wrapped-row-value\">Kid A</span>"));
    assert!(stdout.contains("<span class=\"wrapped-row-value\">Amnesiac</span>"));
    assert!(stdout.contains("by jo • "));
}

#[test]
fn json_export_written_to_file_with_config_watermark() {
    let env = CliTestEnv::new();
    env.write_config("[card]\nyear = 2030\nwatermark = \"FROM CONFIG\"\n");
    let catalog = env.catalog();
    let out_path = env.work.join("card.json").display().to_string();
    let args = [
        "--category",
        catalog.as_str(),
        "--pick",
        "role",
        "--set",
        "commits=42",
        "--export",
        "json",
        "--output",
        out_path.as_str(),
    ];

    let output = run(&env, &args);
    assert_success(&args, &output);

    let contents = fs::read_to_string(&out_path).expect("output file");
    let json: serde_json::Value = serde_json::from_str(&contents).expect("valid json");
    assert_eq!(json["view"]["header"]["label"], "2030 WRAPPED");
    assert_eq!(json["view"]["footer"]["watermark"], "FROM CONFIG");
    assert_eq!(json["view"]["body"]["stat"]["value"], "42");
}

#[test]
fn set_numeric_text_stays_text() {
    let env = CliTestEnv::new();
    let catalog = env.catalog();
    let args = [
        "--category",
        catalog.as_str(),
        "--pick",
        "role",
        "--set",
        "role=0",
        "--export",
        "json",
    ];

    let output = run(&env, &args);
    assert_success(&args, &output);

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json on stdout");
    assert_eq!(json["view"]["body"]["headline"], "0");
}

#[test]
fn unknown_export_format_fails() {
    let env = CliTestEnv::new();
    let catalog = env.catalog();
    let args = [
        "--category",
        catalog.as_str(),
        "--pick",
        "role",
        "--export",
        "pdf",
    ];

    let output = run(&env, &args);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown export format: pdf"), "got:\n{stderr}");
}

#[test]
fn catalog_without_pick_is_rejected() {
    let env = CliTestEnv::new();
    let catalog = env.catalog();
    let args = ["--category", catalog.as_str()];

    let output = run(&env, &args);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to select category"), "got:\n{stderr}");
}
