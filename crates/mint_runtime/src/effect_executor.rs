//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::MintRuntimeContext;

/// Installs the effect executor that spawns reducer-emitted runtime effects in order.
pub fn install(runtime: MintRuntimeContext) {
    // Take the queue before spawning so dispatches from finished effects start a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        runtime.tasks.with_value(|tasks| {
            for effect in queued {
                host.spawn_runtime_effect(tasks, runtime.dispatch, effect);
            }
        });
    });
}
