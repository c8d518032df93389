use crate::parser::Rule;
use crate::{new_parser_error, Result};
use matches::debug_assert_matches;
use pest::iterators::Pair;

/// Parses an `int` pair into a signed value.
///
/// Magnitudes are limited to 32 bits; the sign is applied afterwards, so
/// the result always fits an `i64` and two's complement truncation happens
/// at the encode sites.
pub fn parse_int(pair: Pair<Rule>) -> Result<i64> {
    debug_assert_matches!(pair.as_rule(), Rule::int);
    let span = pair.as_span();
    let negative = span.as_str().starts_with('-');
    let inner = pair.into_inner().next().unwrap();

    let magnitude = match inner.as_rule() {
        Rule::hex_uint => u32::from_str_radix(inner.into_inner().next().unwrap().as_str(), 16),
        Rule::dec_uint => inner.as_str().parse::<u32>(),
        _ => unreachable!(),
    }
    .map_err(|err| new_parser_error(span, format!("parsing integer failed: {}", err)))?;

    let value = i64::from(magnitude);
    Ok(if negative { -value } else { value })
}
