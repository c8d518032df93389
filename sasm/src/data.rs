use crate::int_util::parse_int;
use crate::parser::Rule;
use crate::{new_parser_error, Result};
use matches::debug_assert_matches;
use pest::iterators::Pair;
use simp::{constants, Word};

/// Words emitted even when nothing past the low addresses was written.
const MIN_IMAGE_WORDS: usize = 64;

/// Sparse initial data memory built from `.word` directives.
///
/// The image tracks the highest written address; emission covers address 0
/// through that address, with a floor of 64 entries.
#[derive(Debug, PartialEq)]
pub struct DataImage {
    words: Vec<Word>,
    max_address: usize,
}

impl DataImage {
    pub fn new() -> DataImage {
        DataImage {
            words: vec![0; constants::DMEM_SIZE],
            max_address: MIN_IMAGE_WORDS - 1,
        }
    }

    /// Stores `value` at `address` and widens the emitted range to cover
    /// it.
    pub fn set(&mut self, address: usize, value: Word) {
        self.words[address] = value;
        if address > self.max_address {
            self.max_address = address;
        }
    }

    pub fn get(&self, address: usize) -> Word {
        self.words[address]
    }

    /// The words to emit, address 0 through the highest written address.
    pub fn words(&self) -> &[Word] {
        &self.words[..=self.max_address]
    }
}

impl Default for DataImage {
    fn default() -> DataImage {
        DataImage::new()
    }
}

/// Processes `.word ADDR VAL`: stores `VAL` at data memory address `ADDR`.
/// The directive occupies no program counter space.
pub fn process_word_directive(pair: Pair<Rule>, image: &mut DataImage) -> Result<()> {
    debug_assert_matches!(pair.as_rule(), Rule::word_directive);
    let mut pairs = pair.into_inner();

    let address_pair = pairs.next().unwrap();
    let address_span = address_pair.as_span();
    let address = parse_int(address_pair)?;
    if address < 0 || address >= constants::DMEM_SIZE as i64 {
        return Err(new_parser_error(
            address_span,
            format!(".word address {} is outside data memory", address),
        ));
    }

    let value = parse_int(pairs.next().unwrap())? as Word;
    image.set(address as usize, value);
    Ok(())
}
