use leptos::{create_effect, logging, Callable, Callback};

use crate::reducer::MintAction;

pub(super) fn install_boot(host_strategy: &'static str, dispatch: Callback<MintAction>) {
    create_effect(move |_| {
        logging::log!("mint runtime booting on {host_strategy} host");
        dispatch.call(MintAction::Boot);
    });
}
