use leptos::*;
use leptos_meta::*;
use mint_runtime::{MintProvider, RootView};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Sheep NFT" />
        <Meta name="description" content="Mint a sheep NFT with your MetaMask wallet." />

        <main class="site-root">
            <MintEntry />
        </main>
    }
}

#[component]
pub fn MintEntry() -> impl IntoView {
    view! {
        <MintProvider>
            <RootView />
        </MintProvider>
    }
}
