use clap::{Parser, ValueEnum};
use log::info;
use simplepdf::{InputFormat, PageSize, PipelineBuilder, PipelineError};
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy)]
enum FormatArg {
    Markup,
    Json,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markup => InputFormat::Markup,
            FormatArg::Json => InputFormat::Json,
        }
    }
}

/// Renders an XHTML fragment or a JSON document tree to a PDF file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input document (.html/.xhtml/.xml or .json)
    input: PathBuf,

    /// Where to write the PDF
    output: PathBuf,

    /// Input format; inferred from the input extension when omitted
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// JSON layout configuration (pageSize, margins, lineHeightFactor, baseStyle)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page size: A4, Letter or Legal. Overrides the config file
    #[arg(long, value_parser = PageSize::parse)]
    page_size: Option<PageSize>,

    /// Fail on invalid inline style declarations instead of skipping them
    #[arg(long, default_value_t = false)]
    strict_styles: bool,
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("simplepdf=info"))
        .init();

    let args = Args::parse();

    let format = args
        .format
        .map(InputFormat::from)
        .or_else(|| InputFormat::from_path(&args.input))
        .unwrap_or_default();

    let mut builder = PipelineBuilder::new()
        .with_format(format)
        .with_strict_styles(args.strict_styles);
    if let Some(config_path) = &args.config {
        info!("Loading layout config from {}", config_path.display());
        builder = builder.with_config_file(config_path)?;
    }
    if let Some(page_size) = args.page_size {
        builder = builder.with_page_size(page_size);
    }

    let pipeline = builder.build()?;
    info!(
        "Rendering {} ({:?}) to {}",
        args.input.display(),
        format,
        args.output.display()
    );
    pipeline.generate_to_file(&args.input, &args.output)?;
    info!("Successfully generated {}", args.output.display());
    Ok(())
}
