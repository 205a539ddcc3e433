use clap::Parser;

/// Arguments for the tags command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List the tags used by the default structures:\n    dora tags\n\n\
                  Check whether keywords can be used in a template:\n    dora tags SeriesNumber AcquisitionTime\n\n\
                  Open the DICOM tag registry (use the Keyword column):\n    dora tags --open")]
pub struct TagsArgs {
    /// Keywords to check against the DICOM data dictionary
    pub keywords: Vec<String>,

    /// Open the DICOM tag registry in a web browser
    #[arg(long)]
    pub open: bool,
}
