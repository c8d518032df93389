use crate::parser::Rule;
use crate::{new_parser_error, Result};
use matches::debug_assert_matches;
use pest::iterators::Pair;
use std::collections::HashMap;

/// Longest accepted label name.
pub const MAX_LABEL_LENGTH: usize = 49;

pub type LabelMap<'i> = HashMap<&'i str, u32>;

/// Records a label at the given instruction address.
///
/// Redefining a label is an error, as is a name longer than
/// [`MAX_LABEL_LENGTH`](constant.MAX_LABEL_LENGTH.html).
pub fn define_label<'i>(
    labels: &mut LabelMap<'i>,
    pair: Pair<'i, Rule>,
    address: u32,
) -> Result<()> {
    debug_assert_matches!(pair.as_rule(), Rule::label);
    let ident = pair.into_inner().next().unwrap();
    let span = ident.as_span();
    let name = span.as_str();

    if name.len() > MAX_LABEL_LENGTH {
        return Err(new_parser_error(
            span,
            format!("label name exceeds {} characters", MAX_LABEL_LENGTH),
        ));
    }
    if labels.contains_key(name) {
        return Err(new_parser_error(span, format!("duplicate label {}", name)));
    }

    labels.insert(name, address);
    Ok(())
}
