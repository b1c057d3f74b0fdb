//! Checks the requests of each interface version against the `.did` file of that
//! version: method names, query annotations, argument and reply types.

use candid::types::subtype::{equal, Gamma};
use candid::types::{FuncMode, Type};
use candid::{CandidType, TypeEnv};
use candid_parser::utils::CandidSource;
use rakeoff_achievements_api::{legacy, NeuronId, CANDID_INTERFACE};
use rakeoff_achievements_client::requests::{
    legacy::{
        CheckNeuronRequestV1, CheckNeuronRequestV2, GetCanisterAccountAndStatsRequestV2,
        GetCanisterAccountRequest, GetCanisterStatsRequest,
    },
    CheckAchievementLevelRewardRequest, ClaimAchievementLevelRewardRequest,
    GetCanisterAccountAndStatsRequest, ShowAvailableLevelsRequest,
};
use rakeoff_achievements_client::Request;
use std::collections::BTreeSet;

struct DeclaredInterface {
    env: TypeEnv,
    actor: Type,
    checked: BTreeSet<String>,
}

impl DeclaredInterface {
    fn load(did: &str) -> Self {
        let (env, actor) = CandidSource::Text(did)
            .load()
            .expect("failed to parse the .did file");
        Self {
            env,
            actor: actor.expect("the .did file declares no service"),
            checked: BTreeSet::new(),
        }
    }

    /// Asserts that `request` matches the declared method, given the Candid types of
    /// its arguments.
    fn check<R: Request>(&mut self, request: &R, args: Vec<Type>) {
        let method = request.method();
        let func = self
            .env
            .get_method(&self.actor, method)
            .unwrap_or_else(|err| panic!("method {method} is not declared: {err}"));

        assert_eq!(
            request.update(),
            !func.modes.contains(&FuncMode::Query),
            "{method} is classified differently than declared"
        );

        assert_eq!(func.args.len(), args.len(), "arity of {method}");
        for (declared, actual) in func.args.iter().zip(&args) {
            equal(&mut Gamma::new(), &self.env, declared, actual).unwrap_or_else(|err| {
                panic!("argument of {method} does not match the declaration: {err}")
            });
        }

        assert_eq!(func.rets.len(), 1, "{method} should reply with one value");
        equal(&mut Gamma::new(), &self.env, &func.rets[0], &R::Response::ty())
            .unwrap_or_else(|err| panic!("reply of {method} does not match the declaration: {err}"));

        self.checked.insert(method.to_string());
    }

    fn assert_all_methods_checked(&self) {
        let declared: BTreeSet<String> = self
            .env
            .as_service(&self.actor)
            .expect("actor is not a service")
            .iter()
            .map(|(name, _)| name.clone())
            .collect();
        assert_eq!(declared, self.checked);
    }
}

#[test]
fn requests_match_deployed_interface() {
    let mut interface = DeclaredInterface::load(CANDID_INTERFACE);

    interface.check(&ShowAvailableLevelsRequest, vec![]);
    interface.check(
        &CheckAchievementLevelRewardRequest { neuron_id: 1 },
        vec![NeuronId::ty()],
    );
    interface.check(
        &ClaimAchievementLevelRewardRequest { neuron_id: 1 },
        vec![NeuronId::ty()],
    );
    interface.check(&GetCanisterAccountAndStatsRequest, vec![]);

    interface.assert_all_methods_checked();
}

#[test]
fn requests_match_first_interface() {
    let mut interface = DeclaredInterface::load(legacy::v1::CANDID_INTERFACE);

    interface.check(&ShowAvailableLevelsRequest, vec![]);
    interface.check(
        &CheckNeuronRequestV1 {
            args: neuron_check_args(),
        },
        vec![legacy::NeuronCheckArgs::ty()],
    );
    interface.check(
        &ClaimAchievementLevelRewardRequest { neuron_id: 1 },
        vec![NeuronId::ty()],
    );
    interface.check(&GetCanisterAccountRequest, vec![]);
    interface.check(&GetCanisterStatsRequest, vec![]);

    interface.assert_all_methods_checked();
}

#[test]
fn requests_match_transitional_interface() {
    let mut interface = DeclaredInterface::load(legacy::v2::CANDID_INTERFACE);

    interface.check(&ShowAvailableLevelsRequest, vec![]);
    interface.check(
        &CheckNeuronRequestV2 {
            args: neuron_check_args(),
        },
        vec![legacy::NeuronCheckArgs::ty()],
    );
    interface.check(
        &ClaimAchievementLevelRewardRequest { neuron_id: 1 },
        vec![NeuronId::ty()],
    );
    interface.check(&GetCanisterAccountAndStatsRequestV2, vec![]);

    interface.assert_all_methods_checked();
}

#[test]
fn active_check_request_does_not_match_older_interfaces() {
    for did in [legacy::v1::CANDID_INTERFACE, legacy::v2::CANDID_INTERFACE] {
        let (env, actor) = CandidSource::Text(did).load().unwrap();
        let func = env
            .get_method(&actor.unwrap(), "check_achievement_level_reward")
            .unwrap()
            .clone();

        assert!(equal(&mut Gamma::new(), &env, &func.args[0], &NeuronId::ty()).is_err());
    }
}

fn neuron_check_args() -> legacy::NeuronCheckArgs {
    legacy::NeuronCheckArgs {
        dissolve_delay_seconds: 0,
        state: 1,
        stake_e8s: 0,
        neuron_id: 1,
        age_seconds: 0,
    }
}
