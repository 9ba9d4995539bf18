use anyhow::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tree_sitter::{Language, Node as TSNode, Parser, Tree};

pub struct TreeSitterParser {
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new(language: Language) -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(language)?;
        Ok(Self { parser })
    }

    pub fn parse_source(&mut self, source: &str, file_path: &Path) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("failed to parse file: {}", file_path.display()))
    }

    /// Buffered read of the whole source file.
    pub fn read_source(file_path: &Path) -> Result<String> {
        let file = File::open(file_path)?;
        let file_size = file.metadata()?.len() as usize;

        let mut reader =
            BufReader::with_capacity(if file_size < 8192 { file_size } else { 8192 }, file);
        let mut content = String::with_capacity(file_size);
        reader.read_to_string(&mut content)?;
        Ok(content)
    }
}

pub fn extract_text<'a>(node: &TSNode, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.byte_range()]).unwrap_or("")
}
