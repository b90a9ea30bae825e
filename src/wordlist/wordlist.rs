use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::time::Instant;

use serde_json::Value;
use typed_builder::TypedBuilder;

use crate::wordlist::trie::payload::{FindResult, PayloadTrie};

/// A word file loaded into a payload trie. Each line holds one word,
/// optionally followed by a payload column when a delimiter is configured.
pub struct Wordlist<'a> {
    trie: PayloadTrie<'a, Value>,
}

#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
    #[builder(default, setter(strip_option))]
    payload_column: Option<usize>,
}

impl FileFormat {
    /// Splits one line into the word and its optional payload. Payload
    /// columns are parsed as JSON; anything that isn't JSON is kept as a
    /// plain string value. Returns `None` when the word column is missing.
    fn parse_line<'l>(&self, line: &'l str) -> Option<(&'l str, Option<Value>)> {
        match self.delimiter {
            None => Some((line, None)),
            Some(delimiter) => {
                let columns = line.split(delimiter).collect::<Vec<_>>();
                let word = columns.get(self.word_column.unwrap_or(0)).copied()?;
                let payload = self.payload_column
                    .and_then(|idx| columns.get(idx).copied())
                    .map(|raw| serde_json::from_str::<Value>(raw)
                        .unwrap_or_else(|_| Value::String(raw.to_string())));
                Some((word, payload))
            }
        }
    }
}

impl<'a> Wordlist<'a> {
    pub fn new() -> Wordlist<'a> {
        Wordlist { trie: PayloadTrie::new() }
    }

    pub fn load_file(&'a self, filename: &str, format: FileFormat) -> io::Result<()> {
        println!("Reading words from {:#?}", &filename);

        let file = File::open(filename)?;
        let buf_reader = BufReader::new(file);

        let mut count: usize = 0;
        let mut failures: usize = 0;

        let start = Instant::now();
        for line in buf_reader.lines() {
            match line {
                Ok(line) if !line.is_empty() => {
                    match format.parse_line(&line) {
                        Some((word, Some(payload))) => {
                            self.trie.insert_with(word, payload);
                            count += 1;
                        }
                        Some((word, None)) => {
                            self.trie.insert(word);
                            count += 1;
                        }
                        None => failures += 1,
                    }
                    if count % 100000 == 0 && count > 0 {
                        println!("{}", count);
                    }
                }
                Ok(_) => {}
                Err(_e) => failures += 1,
            }
        }
        let elapsed = start.elapsed();
        println!("Read {} words in {}s ({} kwps) [{} failures]",
                 count, (elapsed.as_millis() as f64) / 1000.0,
                 (count as f64) / (elapsed.as_millis() as f64),
                 failures);
        Ok(())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    pub fn find(&self, prefix: &str) -> Vec<FindResult<Value>> {
        self.trie.find(prefix)
    }
}

impl Default for Wordlist<'_> {
    fn default() -> Self {
        Wordlist::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::wordlist::wordlist::{FileFormat, Wordlist};

    #[test]
    fn plain_format_takes_whole_line() {
        let format = FileFormat::builder().build();
        assert_eq!(format.parse_line("Reinaldo"), Some(("Reinaldo", None)));
    }

    #[test]
    fn delimited_format_parses_json_payload() {
        let format = FileFormat::builder()
            .delimiter(',')
            .payload_column(1)
            .build();
        assert_eq!(format.parse_line(r#"Reinaldo,{"name":"rein"}"#),
                   Some(("Reinaldo", Some(json!({"name": "rein"})))));
    }

    #[test]
    fn non_json_payload_kept_as_string() {
        let format = FileFormat::builder()
            .delimiter('\t')
            .payload_column(1)
            .build();
        assert_eq!(format.parse_line("Pedro\tgoalkeeper"),
                   Some(("Pedro", Some(Value::String("goalkeeper".to_string())))));
    }

    #[test]
    fn missing_word_column_is_a_failure() {
        let format = FileFormat::builder()
            .delimiter(',')
            .word_column(2)
            .build();
        assert_eq!(format.parse_line("Pedro"), None);
    }

    #[test]
    fn missing_payload_column_stores_no_payload() {
        let format = FileFormat::builder()
            .delimiter(',')
            .payload_column(1)
            .build();
        assert_eq!(format.parse_line("Vitor"), Some(("Vitor", None)));
    }

    #[test]
    fn loads_file_into_trie() {
        let mut path = std::env::temp_dir();
        path.push("prefix_tools_wordlist_test.txt");
        std::fs::write(&path, "Reinaldo,{\"name\":\"rein\"}\nVitor\nPedro,{\"name\":\"pedro\"}\n")
            .unwrap();

        let wl = Wordlist::new();
        wl.load_file(path.to_str().unwrap(),
                     FileFormat::builder().delimiter(',').payload_column(1).build())
            .unwrap();

        assert!(wl.contains("vitor"));
        let results = wl.find("re");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "reinaldo");
        assert_eq!(results[0].payload, Some(json!({"name": "rein"})));

        std::fs::remove_file(&path).unwrap();
    }
}
