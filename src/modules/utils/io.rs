use std::io::{self, BufRead, Write};

/// Helper function to read a single line from any reader, without the line terminator
pub fn read_line_from<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut input = String::new();
    reader.read_line(&mut input)?;
    let trimmed = input.strip_suffix('\n').unwrap_or(&input);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}

/// Prompt on stderr and read a passphrase without echoing it
pub fn prompt_passphrase(prompt: &str) -> io::Result<String> {
    eprint!("{}", prompt);
    io::stderr().flush()?;
    rpassword::read_password()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_terminator_only() {
        let mut input = Cursor::new("  AAECAw==:Nv2k  \nsecond line\n");
        assert_eq!(read_line_from(&mut input).unwrap(), "  AAECAw==:Nv2k  ");
        assert_eq!(read_line_from(&mut input).unwrap(), "second line");
    }

    #[test]
    fn test_read_line_handles_crlf_and_eof() {
        let mut input = Cursor::new("token\r\n");
        assert_eq!(read_line_from(&mut input).unwrap(), "token");

        let mut empty = Cursor::new("");
        assert_eq!(read_line_from(&mut empty).unwrap(), "");

        let mut no_newline = Cursor::new("last");
        assert_eq!(read_line_from(&mut no_newline).unwrap(), "last");
    }
}
