use candid::types::value::VariantValue;
use candid::types::{Type, TypeInner};
use candid::{CandidType, IDLArgs, IDLValue};

/// Checks that `reply` holds exactly one value of type `T`, field for field.
///
/// `candid::decode_one` applies Candid subtyping: unknown record fields are dropped
/// and an `opt` of the wrong type decodes as `None`. Replies go through this check
/// first so that such a reply is an error instead.
pub(crate) fn check_exact_type<T: CandidType>(reply: &[u8]) -> Result<(), candid::Error> {
    let IDLArgs { args } = IDLArgs::from_bytes(reply)?;
    let expected = T::ty();
    match args.as_slice() {
        [value] if conforms(value, &expected) => Ok(()),
        [_] => Err(candid::Error::msg(format!(
            "reply is not of type {expected}"
        ))),
        values => Err(candid::Error::msg(format!(
            "expected a single reply value, got {}",
            values.len()
        ))),
    }
}

// The interface has no recursive types, so `Knot` and `Var` never occur in `ty`.
fn conforms(value: &IDLValue, ty: &Type) -> bool {
    match (value, ty.as_ref()) {
        (_, TypeInner::Reserved) => true,
        (IDLValue::Null, TypeInner::Null)
        | (IDLValue::Bool(_), TypeInner::Bool)
        | (IDLValue::Text(_), TypeInner::Text)
        | (IDLValue::Principal(_), TypeInner::Principal)
        | (IDLValue::Nat(_), TypeInner::Nat)
        | (IDLValue::Int(_), TypeInner::Int)
        | (IDLValue::Nat8(_), TypeInner::Nat8)
        | (IDLValue::Nat16(_), TypeInner::Nat16)
        | (IDLValue::Nat32(_), TypeInner::Nat32)
        | (IDLValue::Nat64(_), TypeInner::Nat64)
        | (IDLValue::Int8(_), TypeInner::Int8)
        | (IDLValue::Int16(_), TypeInner::Int16)
        | (IDLValue::Int32(_), TypeInner::Int32)
        | (IDLValue::Int64(_), TypeInner::Int64)
        | (IDLValue::Float32(_), TypeInner::Float32)
        | (IDLValue::Float64(_), TypeInner::Float64)
        | (IDLValue::None | IDLValue::Null, TypeInner::Opt(_)) => true,
        (IDLValue::Opt(inner), TypeInner::Opt(ty)) => conforms(inner, ty),
        (IDLValue::Vec(items), TypeInner::Vec(ty)) => items.iter().all(|item| conforms(item, ty)),
        (IDLValue::Blob(_), TypeInner::Vec(ty)) => matches!(ty.as_ref(), TypeInner::Nat8),
        (IDLValue::Record(fields), TypeInner::Record(expected)) => {
            fields.len() == expected.len()
                && expected.iter().all(|field| {
                    fields.iter().any(|actual| {
                        actual.id.get_id() == field.id.get_id() && conforms(&actual.val, &field.ty)
                    })
                })
        }
        (IDLValue::Variant(VariantValue(actual, _)), TypeInner::Variant(arms)) => arms
            .iter()
            .any(|arm| arm.id.get_id() == actual.id.get_id() && conforms(&actual.val, &arm.ty)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candid::Nat;
    use candid_parser::parse_idl_args;
    use rakeoff_achievements_api::{AchievementLevel, CanisterResult, NeuronAchievementDetails};

    type CheckReply = CanisterResult<NeuronAchievementDetails>;

    fn wire_bytes(text: &str) -> Vec<u8> {
        parse_idl_args(text).unwrap().to_bytes().unwrap()
    }

    fn details_text(cached_level: &str) -> String {
        format!(
            "(variant {{ ok = record {{ \
                neuron_passes_checks = true; \
                current_level = record {{ level_id = 1 : nat; icp_amount_needed = 100 : nat64; icp_reward = 5 : nat64 }}; \
                cached_level = {cached_level}; \
                canister_rewards_available = true; \
                reward_amount_due = 5 : nat64; \
                neuron_id = 42 : nat64 \
            }} }})"
        )
    }

    #[test]
    fn should_accept_reply_of_exact_type() {
        let reply = candid::encode_one(CheckReply::Ok(NeuronAchievementDetails {
            neuron_passes_checks: false,
            current_level: AchievementLevel {
                level_id: Nat::from(2_u32),
                icp_amount_needed: 1,
                icp_reward: 1,
            },
            cached_level: None,
            canister_rewards_available: false,
            reward_amount_due: 0,
            neuron_id: 1,
        }))
        .unwrap();

        let refused = candid::encode_one(CheckReply::Err("no".to_string())).unwrap();

        assert!(check_exact_type::<CheckReply>(&reply).is_ok());
        assert!(check_exact_type::<CheckReply>(&refused).is_ok());
    }

    #[test]
    fn should_accept_present_and_absent_optional_field() {
        let present = details_text(
            "opt record { level_id = 1 : nat; icp_amount_needed = 100 : nat64; icp_reward = 5 : nat64 }",
        );

        assert!(check_exact_type::<CheckReply>(&wire_bytes(&present)).is_ok());
        assert!(check_exact_type::<CheckReply>(&wire_bytes(&details_text("null"))).is_ok());
    }

    #[test]
    fn should_reject_optional_field_of_another_type() {
        let reply = wire_bytes(&details_text("opt (7 : nat64)"));

        assert!(check_exact_type::<CheckReply>(&reply).is_err());
    }

    #[test]
    fn should_reject_unknown_record_field() {
        let reply = wire_bytes(
            "(record { level_id = 1 : nat; icp_amount_needed = 1 : nat64; icp_reward = 1 : nat64; bonus = 1 : nat64 })",
        );

        assert!(check_exact_type::<AchievementLevel>(&reply).is_err());
    }

    #[test]
    fn should_reject_widened_number() {
        let reply = wire_bytes(
            "(record { level_id = 1 : nat; icp_amount_needed = 1 : nat; icp_reward = 1 : nat64 })",
        );

        assert!(check_exact_type::<AchievementLevel>(&reply).is_err());
    }

    #[test]
    fn should_reject_more_than_one_value() {
        let reply = candid::encode_args((1_u64, 2_u64)).unwrap();

        assert!(check_exact_type::<u64>(&reply).is_err());
    }
}
