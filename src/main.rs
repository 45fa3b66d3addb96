use clap::{Args, Parser, Subcommand, ValueEnum};
use smartdoc_pdf::{
    layout::{layout_document_checked, LayoutConfig},
    templates::{TemplateId, TemplateInput},
    Document, Info, PDFError, Typeface, DEFAULT_FILE_NAME,
};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "smartdoc-pdf",
    version,
    about = "Lay out legal documents as paginated, justified PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lay out a plain-text document
    Render {
        /// Input text file, or `-` for stdin
        input: PathBuf,
        #[command(flatten)]
        options: RenderOptions,
    },
    /// Fill in one of the built-in templates and lay it out
    Template {
        template: TemplateId,
        /// JSON file with the parties, description, terms and additional details
        data: PathBuf,
        /// Print the generated text instead of rendering it
        #[arg(long)]
        text: bool,
        #[command(flatten)]
        options: RenderOptions,
    },
}

#[derive(Args)]
struct RenderOptions {
    /// Output file (defaults to legal-document.pdf, or .json with --format json)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Layout configuration as JSON; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// TrueType/OpenType font for body text
    #[arg(long, requires = "font_bold")]
    font_regular: Option<PathBuf>,
    /// TrueType/OpenType font for headings
    #[arg(long, requires = "font_regular")]
    font_bold: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Format::Pdf)]
    format: Format,
    /// Document title written to the PDF metadata
    #[arg(long)]
    title: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Pdf,
    Json,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render { input, options } => read_input(&input).and_then(|text| {
            let title = options
                .title
                .clone()
                .or_else(|| input.file_stem().map(|s| s.to_string_lossy().into_owned()));
            render(&text, title, &options)
        }),
        Command::Template {
            template,
            data,
            text,
            options,
        } => generate(template, &data).and_then(|generated| {
            if text {
                io::stdout()
                    .write_all(generated.as_bytes())
                    .map_err(PDFError::from)
            } else {
                let title = options.title.clone().or_else(|| Some(template.to_string()));
                render(&generated, title, &options)
            }
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn read_input(path: &Path) -> Result<String, PDFError> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn generate(template: TemplateId, data: &Path) -> Result<String, PDFError> {
    let input = TemplateInput::from_json(&fs::read_to_string(data)?)?;
    Ok(template.generate(&input))
}

fn load_config(options: &RenderOptions) -> Result<LayoutConfig, PDFError> {
    match &options.config {
        Some(path) => LayoutConfig::from_json(&fs::read_to_string(path)?),
        None => Ok(LayoutConfig::default()),
    }
}

fn load_typeface(options: &RenderOptions, config: &LayoutConfig) -> Result<Typeface, PDFError> {
    match (&options.font_regular, &options.font_bold) {
        (Some(regular), Some(bold)) => Typeface::embedded(fs::read(regular)?, fs::read(bold)?),
        _ => Ok(Typeface::standard(config.font_family)),
    }
}

fn render(text: &str, title: Option<String>, options: &RenderOptions) -> Result<(), PDFError> {
    let config = load_config(options)?;
    let typeface = load_typeface(options, &config)?;
    let layout = layout_document_checked(text, &config, &typeface)?;

    let output = options.output.clone().unwrap_or_else(|| {
        let default = PathBuf::from(DEFAULT_FILE_NAME);
        match options.format {
            Format::Pdf => default,
            Format::Json => default.with_extension("json"),
        }
    });
    let mut file = io::BufWriter::new(fs::File::create(&output)?);

    match options.format {
        Format::Json => serde_json::to_writer_pretty(&mut file, &layout)?,
        Format::Pdf => {
            let mut document = Document::new(layout, typeface);
            if let Some(title) = title {
                let mut info = Info::new();
                info.title(title);
                document.set_info(info);
            }
            document.write(&mut file)?;
        }
    }
    file.flush()?;

    log::info!("wrote {}", output.display());
    Ok(())
}
