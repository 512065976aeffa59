use crate::i18n::Strings;
use crate::pass;
use crate::settings::Configuration;
use crate::terminal::{
    BOLD, DIM, GREEN, RESET, box_bottom, box_field, box_line, box_line_center, box_opt, box_rule,
    box_top, clear, flush, print_error,
};

/// Message shown under the popup box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    None,
    Notice(String),
    Error(String),
}

fn on_off(value: bool) -> &'static str {
    if value { "[x]" } else { "[ ]" }
}

pub fn print_help() {
    box_top("segpass");
    box_line_center("Segmented password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments (or with -i). Edit the");
    box_line("     settings and regenerate; every change is remembered.");
    box_line("  2) Client: Pass flags directly (e.g., -s 4 -l 5) to print a");
    box_line("     password. Changed settings are remembered for next time.");
    box_line("");
    box_line("USAGE:");
    box_line("  segpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -s, --segments <N>", "Number of segments (default: 3)");
    box_opt("  -l, --length <N>", "Characters per segment (default: 6)");
    box_line("      Segments x length may not exceed 4096 characters.");
    box_opt("      --letters, --no-letters", "Use a-z and A-Z (default: on)");
    box_opt("      --digits, --no-digits", "Use 0-9 (default: on)");
    box_opt("  -p, --punctuation", "Use ASCII punctuation (default: off)");
    box_opt("      --no-punctuation", "Do not use ASCII punctuation");
    box_opt("  -a, --additional <CHARS>", "Always include these characters (default: !§$%&?)");
    box_opt("  -f, --forbidden <CHARS>", "Never use these characters (default: °^\\)");
    box_line("");
    box_line(" Output:");
    box_opt("  -n, --number <N>", "How many passwords to print (default: 1)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -d, --default", "Use default settings for this run, save nothing");
    box_opt("  -r, --reset", "Reset the saved settings to defaults (not with -d)");
    box_opt("  -i, --interactive", "Open the interactive screen");
    box_opt("      --lang <CODE>", "UI language: de or en (default: from locale)");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("ENVIRONMENT:");
    box_opt("  SEGPASS_CONFIG", "Settings file (default: ~/.config/segpass/settings.json)");
    box_opt("  SEGPASS_LOG", "Diagnostic log filter, e.g. debug (default: warn)");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  segpass                    Interactive screen");
    box_line("  segpass -s 4 -l 5          aB3dE-x7YkQ-2mPq9-Zt4wR");
    box_line("  segpass --no-letters -n 3  Three digit-only passwords");
    box_line("  segpass -f 0Oo1lI          Avoid look-alike characters");
    box_line("");
    box_bottom();
    println!();
}

/// Draw the whole popup: settings, current password and status line.
pub fn print_popup(
    strings: &Strings,
    config: &Configuration,
    password: Option<&str>,
    status: &Status,
) {
    clear();
    box_top(&strings.title);
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");
    box_field(&format!("  1) {}", strings.segments), &config.segment_count.to_string());
    box_field(&format!("  2) {}", strings.length), &config.segment_length.to_string());
    box_field(&format!("  3) {}", strings.letter), on_off(config.use_letters));
    box_field(&format!("  4) {}", strings.digit), on_off(config.use_digits));
    box_field(&format!("  5) {}", strings.punctuation), on_off(config.use_punctuation));
    box_field(&format!("  6) {}", strings.additional), &config.additional_chars);
    box_field(&format!("  7) {}", strings.forbidden), &config.forbidden_chars);
    box_line("");
    box_rule();

    let shown = password.unwrap_or("");
    box_field(&format!("  {}", strings.password), &format!("{BOLD}{shown}{RESET}"));

    let bits = pass::entropy_bits(config);
    box_field(
        &format!("  {}", strings.entropy),
        &format!(
            "{DIM}{:.1} bits ({}), {} {}{RESET}",
            bits,
            strings.strength(pass::strength(bits)),
            pass::charset::size(config),
            strings.chars
        ),
    );

    box_rule();
    box_line(&format!(
        "  Enter) {}  |  r) {}  |  c) {}  |  q) {}",
        strings.generate, strings.reset, strings.copy, strings.quit
    ));
    box_bottom();

    match status {
        Status::None => println!(),
        Status::Notice(msg) => println!("{GREEN}{msg}{RESET}"),
        Status::Error(msg) => print_error(msg),
    }
    flush();
}
