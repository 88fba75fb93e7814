use crate::common::Operator;
use proptest::prelude::*;

pub(crate) fn modifier_strategy() -> impl Strategy<Value = String> {
    (0u64..=1000).prop_map(|n| n.to_string())
}

pub(crate) fn dice_strategy() -> impl Strategy<Value = String> {
    (prop::option::of(1u64..=100), 1u64..=100, any::<bool>()).prop_map(|(count, sides, upper)| {
        let count = count.map(|c| c.to_string()).unwrap_or_default();
        let marker = if upper { 'D' } else { 'd' };
        format!("{}{}{}", count, marker, sides)
    })
}

pub(crate) fn term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![modifier_strategy(), dice_strategy()]
}

pub(crate) fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![Just(Operator::Plus), Just(Operator::Minus)]
}

fn padding_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just(" "), Just("  "), Just("\t")]
}

/// A chained expression, and the operators it was built with in order.
pub(crate) fn chain_strategy() -> impl Strategy<Value = (String, Vec<Operator>)> {
    let link = (
        padding_strategy(),
        operator_strategy(),
        padding_strategy(),
        term_strategy(),
    );

    (term_strategy(), prop::collection::vec(link, 0..8)).prop_map(|(initial, links)| {
        let mut input = initial;
        let mut ops = Vec::with_capacity(links.len());
        for (before, op, after, term) in links {
            input.push_str(before);
            input.push(op.as_char());
            input.push_str(after);
            input.push_str(&term);
            ops.push(op);
        }
        (input, ops)
    })
}
