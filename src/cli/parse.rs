use super::CliFlags;
use crate::error::ParseError;

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut args = args.iter().skip(1);

    while let Some(arg) = args.next() {
        let mut value = || {
            args.next()
                .cloned()
                .ok_or_else(|| ParseError::MissingValue(arg.clone()))
        };

        match arg.as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-d" | "--default" => flags.default = true,
            "-r" | "--reset" => flags.reset = true,
            "-i" | "--interactive" => flags.interactive = true,
            "--letters" => flags.letters = Some(true),
            "--no-letters" => flags.letters = Some(false),
            "--digits" => flags.digits = Some(true),
            "--no-digits" => flags.digits = Some(false),
            "-p" | "--punctuation" => flags.punctuation = Some(true),
            "--no-punctuation" => flags.punctuation = Some(false),
            "-s" | "--segments" => flags.segments = Some(number(value()?)?),
            "-l" | "--length" => flags.length = Some(number(value()?)?),
            "-n" | "--number" => flags.number = Some(number(value()?)?),
            // Character lists are taken verbatim, even if they start with '-'
            "-a" | "--additional" => flags.additional = Some(value()?),
            "-f" | "--forbidden" => flags.forbidden = Some(value()?),
            "--lang" => flags.lang = Some(value()?),
            other => return Err(ParseError::UnknownArg(other.to_string())),
        }
    }

    Ok(flags)
}

fn number(s: String) -> Result<usize, ParseError> {
    s.trim().parse().map_err(|_| ParseError::InvalidNumber(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("segpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_arguments() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn shape_and_classes() {
        let flags = parse(&args(&[
            "-s", "4", "--length", "5", "--no-letters", "-p", "--digits",
        ]))
        .unwrap();
        assert_eq!(flags.segments, Some(4));
        assert_eq!(flags.length, Some(5));
        assert_eq!(flags.letters, Some(false));
        assert_eq!(flags.digits, Some(true));
        assert_eq!(flags.punctuation, Some(true));
        assert_eq!(flags.additional, None);
    }

    #[test]
    fn character_lists_may_look_like_flags() {
        let flags = parse(&args(&["-f", "-_", "--additional", "", "-q"])).unwrap();
        assert_eq!(flags.forbidden.as_deref(), Some("-_"));
        assert_eq!(flags.additional.as_deref(), Some(""));
        assert!(flags.quiet);
    }

    #[test]
    fn switches() {
        let flags = parse(&args(&["-b", "-d", "-r", "-i", "--lang", "de", "-n", "3"])).unwrap();
        assert!(flags.clipboard && flags.default && flags.reset && flags.interactive);
        assert_eq!(flags.lang.as_deref(), Some("de"));
        assert_eq!(flags.number, Some(3));
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&args(&["-l", "six"])),
            Err(ParseError::InvalidNumber("six".into()))
        );
        assert_eq!(
            parse(&args(&["-s", "-2"])),
            Err(ParseError::InvalidNumber("-2".into()))
        );
        assert_eq!(
            parse(&args(&["--segments"])),
            Err(ParseError::MissingValue("--segments".into()))
        );
        assert_eq!(
            parse(&args(&["--hex"])),
            Err(ParseError::UnknownArg("--hex".into()))
        );
    }
}
