//! Runtime provider and context wiring for the mint front-end.
//!
//! This module owns the reducer container, the runtime effect queue, and the task scope that
//! bounds every spawned effect. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    effect_executor,
    host::MintHostContext,
    model::MintState,
    reducer::{reduce_mint, MintAction, RuntimeEffect},
    tasks::TaskScope,
};

#[derive(Clone, Copy)]
/// Leptos context for reading mint state and dispatching [`MintAction`] values.
pub struct MintRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<MintHostContext>,
    /// Reactive mint state signal.
    pub state: RwSignal<MintState>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<MintAction>,
    /// Cancellation scope for in-flight effects.
    pub tasks: StoredValue<TaskScope>,
}

impl MintRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: MintAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`MintRuntimeContext`] to descendant components and boots the runtime.
pub fn MintProvider(
    /// Injected host bundle; defaults to the browser composition.
    #[prop(optional)]
    host: Option<MintHostContext>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host.unwrap_or_default());
    let state = create_rw_signal(host.with_value(MintHostContext::initial_state));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let scope = TaskScope::default();
    let tasks = store_value(scope.clone());

    let dispatch = Callback::new(move |action: MintAction| {
        let mut next = state.get_untracked();
        let previous = next.clone();

        match reduce_mint(&mut next, action) {
            Ok(new_effects) => {
                if next != previous {
                    state.set(next);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("mint reducer error: {err}"),
        }
    });

    let runtime = MintRuntimeContext {
        host,
        state,
        effects,
        dispatch,
        tasks,
    };

    provide_context(runtime);
    on_cleanup(move || scope.cancel_all());

    effect_executor::install(runtime);
    host.with_value(|host| host.install_boot(dispatch));

    children().into_view()
}

/// Returns the current [`MintRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`MintProvider`].
pub fn use_mint_runtime() -> MintRuntimeContext {
    use_context::<MintRuntimeContext>().expect("MintRuntimeContext not provided")
}
