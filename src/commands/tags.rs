//! Tags command: common DICOM tags and keyword lookup

use console::Style;

use crate::cli::TagsArgs;
use crate::error::{Result, template};
use crate::explorer::{self, DICOM_TAGS_URL};
use crate::template::{COMMON_TAGS, is_known_keyword};

/// Run tags command
pub fn run(args: TagsArgs) -> Result<()> {
    if args.open {
        explorer::open_website(DICOM_TAGS_URL)?;
    }

    if args.keywords.is_empty() {
        print_common_tags();
        return Ok(());
    }

    check_keywords(&args.keywords)
}

/// Print the tags used by the default structures and how to use them
pub(crate) fn print_common_tags() {
    let header = Style::new().bold().green();
    let keyword = Style::new().cyan();

    println!("{}", header.apply_to("Common DICOM tags:"));
    for (name, number) in COMMON_TAGS {
        println!("  {:<20} {}", keyword.apply_to(name), number);
    }
    println!();
    println!("Use keywords in curly braces to build structures, e.g.");
    println!("  {{PatientID}}/{{StudyDate}}/{{SeriesNumber}}");
    println!("All DICOM keywords: {DICOM_TAGS_URL}");
}

fn check_keywords(keywords: &[String]) -> Result<()> {
    let known = Style::new().green();
    let unknown = Style::new().red();

    let mut missing = Vec::new();
    for name in keywords {
        if is_known_keyword(name) {
            println!("{} {name}", known.apply_to("✓"));
        } else {
            println!("{} {name}", unknown.apply_to("✗"));
            missing.push(name.as_str());
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(template::unknown_tag(missing.join(", ")))
    }
}
