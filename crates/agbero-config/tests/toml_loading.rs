//! Project-level `.agbero/config.toml` loading.

use std::path::Path;

use agbero_config::AgberoConfig;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_deploy_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[deploy]
network = "localnet"
funding_threshold_sol = 10.0
airdrop_sol = 1.0
placeholder_program_id = "Placeholder111"
program_id_label = "Program ID:"
patch_files = ["Anchor.toml"]
commit_message = "deploy"
"#,
        )?;

        let config: AgberoConfig = Figment::from(Serialized::defaults(AgberoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.deploy.network, "localnet");
        assert_eq!(config.deploy.placeholder_program_id, "Placeholder111");
        assert_eq!(config.deploy.program_id_label, "Program ID:");
        assert_eq!(config.deploy.patch_files, vec!["Anchor.toml".to_string()]);
        assert_eq!(config.deploy.commit_message, "deploy");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(".agbero").expect("create .agbero");
        jail.create_file(
            ".agbero/config.toml",
            r#"
[ledger]
rpc_url = "http://127.0.0.1:8899"
keypair_path = "keys/id.json"
"#,
        )?;

        let config = AgberoConfig::load(Path::new(".")).expect("config loads");
        assert_eq!(config.ledger.rpc_url, "http://127.0.0.1:8899");
        assert_eq!(config.ledger.keypair_path, "keys/id.json");
        // Untouched section keeps its defaults.
        assert_eq!(config.deploy.network, "devnet");
        Ok(())
    });
}

#[test]
fn env_overrides_project_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(".agbero").expect("create .agbero");
        jail.create_file(
            ".agbero/config.toml",
            r#"
[deploy]
network = "localnet"
"#,
        )?;
        jail.set_env("AGBERO_DEPLOY__NETWORK", "mainnet-beta");

        let config = AgberoConfig::load(Path::new(".")).expect("config loads");
        assert_eq!(config.deploy.network, "mainnet-beta");
        Ok(())
    });
}
