//! PiT Wizard entry point
//!
//! The browser build is driven by `WebWizard` from the page script. Natively
//! this prints the stored draft as export JSON:
//!
//! ```text
//! pit-wizard <schema.json> [draft-dir] [config.json]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;

    use pit_wizard::platform::FileStore;
    use pit_wizard::{FieldRegistry, Schema, Wizard, WizardConfig};

    /// Print the stored questionnaire draft as export JSON
    #[derive(Debug, Parser)]
    #[command(name = "pit-wizard", version)]
    pub struct Args {
        /// Field schema: `{"steps": [[{"name": ..., "kind": ...}]]}`
        pub schema: PathBuf,
        /// Directory holding `<storage-key>.json` drafts
        #[arg(default_value = ".")]
        pub draft_dir: PathBuf,
        /// Optional wizard config overriding the defaults
        pub config: Option<PathBuf>,
    }

    pub fn run(args: Args) -> anyhow::Result<String> {
        let config = match &args.config {
            Some(path) => WizardConfig::load_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => WizardConfig::default(),
        };
        let schema_json = std::fs::read_to_string(&args.schema)
            .with_context(|| format!("reading schema {}", args.schema.display()))?;
        let schema = Schema::from_json(&schema_json)
            .with_context(|| format!("parsing schema {}", args.schema.display()))?;
        log::info!(
            "Schema {} has {} steps, draft dir {}",
            args.schema.display(),
            schema.steps.len(),
            args.draft_dir.display()
        );

        let store = FileStore::new(args.draft_dir);
        let mut wizard = Wizard::new(config, FieldRegistry::new(&schema), store);
        let (loaded, view) = wizard.start();
        log::info!("{:?}, showing {}", loaded, view.label);

        wizard.export().context("rendering export JSON")
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    use clap::Parser;

    env_logger::init();
    log::info!("PiT wizard (native) starting...");

    let args = native::Args::parse();
    match native::run(args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}
