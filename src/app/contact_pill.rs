use std::time::Duration;

use leptos::prelude::*;

use crate::{
    content::CopyableEntry,
    copy::{presentation::present, CopyAction, DomClipboard, TimerScheduler, TransientFlag},
};

use super::cards::Glyph;

/// A contact value that copies itself when clicked and says so for `feedback`.
#[component]
pub fn ContactPill(entry: &'static CopyableEntry, feedback: Duration) -> impl IntoView {
    let copied = RwSignal::new(false);
    let action = CopyAction::new(
        DomClipboard,
        TransientFlag::new(TimerScheduler, copied, feedback),
    );

    // no timer may outlive the pill
    let flag = action.flag().clone();
    on_cleanup(move || flag.reset());

    let look = move || present(entry.color, copied.get());

    view! {
        <div
            role="button"
            on:click=move |_| {
                // trigger already logs the failure
                _ = action.trigger(&entry.value);
            }
            class=move || {
                let look = look();
                format!(
                    "relative group flex items-center gap-3 px-4 py-3 rounded-xl border cursor-pointer transition-all duration-300 active:scale-95 {} {}",
                    look.container,
                    look.accent,
                )
            }
        >
            <div class=move || format!("p-2 rounded-lg {}", look().badge)>
                <Glyph icon=entry.icon size=18 />
            </div>
            <div>
                <div class="text-[10px] uppercase font-bold tracking-wider opacity-60">
                    {entry.label.as_str()}
                </div>
                <div class="font-bold text-sm font-mono">{entry.value.as_str()}</div>
            </div>
            <div class="absolute right-3 top-1/2 -translate-y-1/2 text-slate-300 group-hover:text-slate-500 transition-colors">
                <i
                    class=move || {
                        let look = look();
                        format!("{} {}", look.indicator.class(), look.indicator_class)
                    }
                    style="font-size: 16px; line-height: 1"
                    aria-hidden="true"
                ></i>
            </div>
            <div class=move || {
                format!(
                    "absolute -top-8 left-1/2 -translate-x-1/2 px-2 py-1 bg-slate-800 text-white text-xs rounded whitespace-nowrap transition-opacity {}",
                    look().hint_class,
                )
            }>{move || look().hint}</div>
        </div>
    }
}
