mod cards;
mod contact_pill;
mod homepage;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{AnchorLink, ContentError, Footer, Profile, ABOUT_ANCHOR};
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh-CN">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="stylesheet" href="https://unpkg.com/lucide-static@0.460.0/font/lucide.css" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn BackgroundPattern() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-[-1] overflow-hidden pointer-events-none">
            <div class="absolute inset-0 bg-[radial-gradient(#cbd5e1_1px,transparent_1px)] [background-size:24px_24px] opacity-40"></div>
            <div class="absolute top-[-10%] left-[-10%] w-[50%] h-[50%] rounded-full bg-sky-100 blur-[120px] opacity-40"></div>
            <div class="absolute bottom-[10%] right-[-5%] w-[40%] h-[40%] rounded-full bg-indigo-50 blur-[100px] opacity-50"></div>
        </div>
    }
}

#[component]
fn TopNav(profile: &'static Profile, links: &'static [AnchorLink]) -> impl IntoView {
    view! {
        <nav class="fixed top-0 w-full bg-white/70 backdrop-blur-xl border-b border-white/20 z-50">
            <div class="max-w-6xl mx-auto px-6 h-20 flex items-center justify-between">
                <a href=format!("#{ABOUT_ANCHOR}") class="flex items-center gap-3 cursor-pointer group">
                    <div class="w-10 h-10 bg-gradient-to-br from-blue-600 to-indigo-600 rounded-xl flex items-center justify-center text-white font-bold text-xl shadow-lg shadow-blue-500/20 group-hover:scale-105 transition-transform">
                        {profile.initial.as_str()}
                    </div>
                    <div class="flex flex-col">
                        <span class="font-bold text-slate-900 text-lg leading-none">
                            {profile.name.as_str()}
                        </span>
                        <span class="text-xs text-slate-400 font-medium tracking-wide">
                            {profile.role.as_str()}
                        </span>
                    </div>
                </a>
                <div class="hidden md:flex items-center gap-1">
                    {links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=format!("#{}", link.target)
                                    class="px-5 py-2 text-sm font-medium text-slate-600 hover:text-blue-600 hover:bg-blue-50 rounded-full transition-all"
                                >
                                    {link.label.as_str()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

fn build_date() -> &'static str {
    let built = env!("BUILD_TIME");
    built.get(..10).unwrap_or(built)
}

#[component]
fn SiteFooter(name: &'static str, footer: &'static Footer) -> impl IntoView {
    view! {
        <footer class="bg-slate-50 border-t border-slate-100 py-12 mt-20">
            <div class="max-w-6xl mx-auto px-6 text-center">
                <div class="text-slate-900 font-bold text-lg">
                    {name}
                    <span class="text-blue-600">{footer.brand_suffix.as_str()}</span>
                </div>
                <p class="text-slate-500 text-sm mt-1">{footer.tagline.as_str()}</p>
                <p class="text-slate-300 text-xs mt-4 font-mono">"built " {build_date()}</p>
            </div>
        </footer>
    }
}

#[component]
fn ContentNotice(err: &'static ContentError) -> impl IntoView {
    log::error!("Portfolio content unavailable: {err}");
    view! {
        <main class="min-h-screen flex items-center justify-center px-6">
            <div class="max-w-xl p-6 rounded-2xl border border-red-200 bg-red-50 text-red-700">
                <h1 class="font-bold text-lg mb-2">"Portfolio content is unavailable"</h1>
                <pre class="whitespace-pre-wrap text-sm">{err.to_string()}</pre>
            </div>
        </main>
    }
}
