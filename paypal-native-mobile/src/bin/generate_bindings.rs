//! Generates Swift, Kotlin or Python bindings for the PayPal native mobile
//! library using uniffi_bindgen's library mode.
//!
//! ```text
//! cargo build --release -p paypal-native-mobile
//! cargo run -p paypal-native-mobile --features bindgen-cli --bin generate-bindings -- -l kotlin
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use uniffi_bindgen::bindings::{
    KotlinBindingGenerator, PythonBindingGenerator, SwiftBindingGenerator,
};
use uniffi_bindgen::library_mode::generate_bindings;
use uniffi_bindgen::{BindingGenerator, EmptyCrateConfigSupplier};

/// Only this crate's components are emitted; crates linked into the same
/// library are skipped.
const CRATE_NAME: &str = "paypal_native_mobile";

#[derive(Parser)]
#[command(name = "generate-bindings")]
#[command(about = "Generate UniFFI bindings for paypal-native-mobile")]
struct Cli {
    /// Compiled library (.dylib, .so or .a)
    #[arg(long, default_value = "../target/release/libpaypal_native_mobile.dylib")]
    library: Utf8PathBuf,

    #[arg(short = 'l', long = "language", value_enum, default_value_t = Language::Swift)]
    language: Language,

    /// Defaults to `<language>/generated`
    #[arg(short = 'o', long = "out-dir")]
    out_dir: Option<Utf8PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Language {
    Swift,
    Kotlin,
    Python,
}

impl Language {
    fn name(self) -> &'static str {
        match self {
            Self::Swift => "swift",
            Self::Kotlin => "kotlin",
            Self::Python => "python",
        }
    }

    fn default_out_dir(self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.name()).join("generated")
    }
}

/// Run one generator and return how many components it emitted.
fn generate<G: BindingGenerator>(
    library: &Utf8Path,
    out_dir: &Utf8Path,
    generator: &G,
) -> anyhow::Result<usize> {
    let components = generate_bindings(
        library,
        Some(CRATE_NAME.to_string()),
        generator,
        &EmptyCrateConfigSupplier,
        None,
        out_dir,
        false,
    )?;
    Ok(components.len())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.library.exists() {
        anyhow::bail!("Library not found: {}", cli.library);
    }

    let out_dir = cli
        .out_dir
        .unwrap_or_else(|| cli.language.default_out_dir());
    std::fs::create_dir_all(&out_dir)?;

    let generated = match cli.language {
        Language::Swift => generate(&cli.library, &out_dir, &SwiftBindingGenerator)?,
        Language::Kotlin => generate(&cli.library, &out_dir, &KotlinBindingGenerator)?,
        Language::Python => generate(&cli.library, &out_dir, &PythonBindingGenerator)?,
    };

    if generated == 0 {
        anyhow::bail!("No UniFFI components for {} found in {}", CRATE_NAME, cli.library);
    }

    println!(
        "Generated {} bindings for {} in {}",
        cli.language.name(),
        CRATE_NAME,
        out_dir
    );
    Ok(())
}
