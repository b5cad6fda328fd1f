pub mod local;

#[cfg(feature = "cli")]
use clap::Parser;

/// Case-sensitive suffix an entry name must end with to be embedded.
pub const IMAGE_SUFFIX: &str = ".png";

/// Applied in order, every occurrence, to the extension-less file name.
pub const IDENTIFIER_SUBSTITUTIONS: [(&str, &str); 2] = [("@", "$"), ("UI", "SM")];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "png2objc", version)]
#[command(
    about = "Print every .png in the current directory as an Objective-C base64 string method"
)]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose logging on stderr")]
    pub verbose: bool,
}
