use leptos::{either::*, prelude::*};

use crate::content::{
    Award, Emphasis, ExperienceItem, FitItem, Icon, Project, ProjectSection, Skill, Stat, TextRun,
};

#[component]
pub fn Glyph(
    icon: Icon,
    #[prop(default = 16)] size: u32,
    #[prop(optional)] accent: &'static str,
) -> impl IntoView {
    view! {
        <i
            class=format!("{} {accent}", icon.class())
            style=format!("font-size: {size}px; line-height: 1")
            aria-hidden="true"
        ></i>
    }
}

#[component]
pub fn Runs(runs: &'static [TextRun]) -> impl IntoView {
    runs.iter()
        .map(|run| {
            let text = run.text.as_str();
            match run.emphasis {
                Emphasis::None => EitherOf3::A(text),
                Emphasis::Strong => EitherOf3::B(view! { <strong>{text}</strong> }),
                Emphasis::Underline => EitherOf3::C(
                    view! {
                        <span class="font-semibold text-slate-900 border-b-2 border-blue-200 mx-1">
                            {text}
                        </span>
                    },
                ),
            }
        })
        .collect_view()
}

#[component]
pub fn SectionHeading(
    title: &'static str,
    subtitle: Option<&'static str>,
    #[prop(optional)] rule: bool,
) -> impl IntoView {
    view! {
        <div class="flex items-end justify-between mb-12 px-2">
            <div>
                <h2 class="text-3xl font-bold text-slate-900 mb-2">{title}</h2>
                {subtitle.map(|s| view! { <p class="text-slate-500">{s}</p> })}
            </div>
            {rule.then(|| view! { <div class="hidden sm:block h-px bg-slate-200 w-1/3 mb-2"></div> })}
        </div>
    }
}

#[component]
pub fn SkillPill(skill: &'static Skill) -> impl IntoView {
    let look = if skill.highlight {
        skill.color.highlight_pill()
    } else {
        "bg-white border-slate-200 text-slate-600 hover:border-blue-300"
    };
    view! {
        <div class=format!(
            "flex items-center gap-1.5 px-3 py-1.5 rounded-full text-xs font-medium border transition-all cursor-default {look}",
        )>
            <Glyph icon=skill.icon size=12 accent=skill.color.icon_text(skill.highlight) />
            {skill.text.as_str()}
        </div>
    }
}

#[component]
pub fn StatCard(stat: &'static Stat) -> impl IntoView {
    let (card, badge, tag, value, title) = if stat.highlight {
        (
            "bg-gradient-to-br from-blue-600 to-indigo-700 text-white border-blue-500 shadow-blue-200",
            "bg-white/20 text-white",
            "bg-white/20 text-blue-50",
            "text-white",
            "text-blue-100",
        )
    } else {
        (
            "bg-white/80 backdrop-blur-sm border-white hover:shadow-lg",
            "bg-slate-50 text-slate-600 group-hover:bg-blue-50 group-hover:text-blue-600",
            "text-slate-400 bg-slate-100/50",
            "text-slate-800",
            "text-slate-500",
        )
    };
    view! {
        <div
            class=format!(
                "p-6 rounded-2xl border shadow-sm transition-all duration-500 flex flex-col justify-between h-full animate-fade-in-up group hover:scale-[1.02] {card}",
            )
            style=format!("animation-delay: {}ms", stat.delay_ms)
        >
            <div class="flex justify-between items-start mb-6">
                <div class=format!("p-3 rounded-xl transition-colors {badge}")>
                    <Glyph icon=stat.icon size=22 />
                </div>
                {stat
                    .subtext
                    .as_deref()
                    .map(|s| {
                        view! {
                            <span class=format!(
                                "text-[10px] uppercase font-bold tracking-wider px-2 py-1 rounded-md {tag}",
                            )>{s}</span>
                        }
                    })}
            </div>
            <div>
                <div class=format!(
                    "text-4xl font-extrabold tracking-tight mb-2 {value}",
                )>{stat.value.as_str()}</div>
                <div class=format!("text-sm font-medium {title}")>{stat.title.as_str()}</div>
            </div>
        </div>
    }
}

#[component]
pub fn FitCard(item: &'static FitItem) -> impl IntoView {
    view! {
        <div class="bg-white/60 backdrop-blur-sm p-5 rounded-2xl border border-blue-100 shadow-sm flex items-start gap-4 hover:shadow-md transition-all hover:bg-white hover:border-blue-200">
            <div class="p-2 bg-blue-50 text-blue-600 rounded-lg shrink-0 mt-1">
                <Glyph icon=item.icon size=20 />
            </div>
            <div>
                <h3 class="font-bold text-slate-900 mb-1">{item.title.as_str()}</h3>
                <p class="text-sm text-slate-600 leading-relaxed">{item.desc.as_str()}</p>
            </div>
        </div>
    }
}

#[component]
pub fn ExperienceCard(item: &'static ExperienceItem) -> impl IntoView {
    view! {
        <div class="group relative bg-white rounded-2xl p-8 border border-slate-100 shadow-sm hover:shadow-md transition-all">
            <div class="flex flex-col md:flex-row md:items-start justify-between gap-4 mb-4">
                <div class="flex items-center gap-4">
                    <div class=format!(
                        "w-12 h-12 rounded-xl flex items-center justify-center shrink-0 {}",
                        item.color.badge(),
                    )>
                        <Glyph icon=item.icon size=24 />
                    </div>
                    <div>
                        <h3 class="text-xl font-bold text-slate-900">{item.role.as_str()}</h3>
                        <p class="text-slate-500 font-medium">{item.organization.as_str()}</p>
                    </div>
                </div>
                <span class="text-sm font-mono text-slate-400 bg-slate-50 px-3 py-1 rounded-full">
                    {item.period.as_str()}
                </span>
            </div>
            <div class="md:pl-16 space-y-3">
                <p class="text-slate-600 leading-relaxed">
                    <Runs runs=item.summary.as_slice() />
                </p>
                {(!item.tags.is_empty())
                    .then(|| {
                        view! {
                            <div class="flex gap-2">
                                {item
                                    .tags
                                    .iter()
                                    .map(|tag| {
                                        view! {
                                            <span class="px-2.5 py-1 bg-slate-50 border border-slate-100 rounded text-xs font-medium text-slate-500">
                                                {tag.as_str()}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
                {(!item.highlights.is_empty())
                    .then(|| {
                        view! {
                            <div class="flex flex-col sm:flex-row gap-4 pt-1">
                                {item
                                    .highlights
                                    .iter()
                                    .map(|h| {
                                        view! {
                                            <div class="flex items-center gap-2 text-sm text-slate-700">
                                                <span class=format!(
                                                    "w-1.5 h-1.5 rounded-full {}",
                                                    h.color.dot(),
                                                )></span>
                                                {h.text.as_str()}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
pub fn AwardCard(award: &'static Award) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-2xl border border-slate-100 shadow-sm flex flex-col gap-4">
            <div class="flex items-center gap-3">
                <div class=format!("p-2 rounded-lg {}", award.color.badge())>
                    <Glyph icon=award.icon size=20 />
                </div>
                <div>
                    <div class="font-bold text-slate-900">{award.title.as_str()}</div>
                    <div class="text-xs text-slate-400">{award.caption.as_str()}</div>
                </div>
            </div>
            <p class="text-sm text-slate-600">{award.desc.as_str()}</p>
        </div>
    }
}

#[component]
pub fn ProjectCard(project: &'static Project, section: &'static ProjectSection) -> impl IntoView {
    view! {
        <div class="group flex flex-col h-full bg-white rounded-2xl border border-slate-100 shadow-sm hover:shadow-xl hover:-translate-y-1 transition-all duration-300 p-8 relative overflow-hidden">
            <div class="absolute -right-6 -top-6 opacity-[0.03] group-hover:opacity-[0.08] transition-opacity transform rotate-12">
                <Glyph icon=project.icon size=180 />
            </div>
            <div class="relative z-10 flex flex-col h-full">
                <div class="flex items-center justify-between mb-6">
                    <div class="p-3.5 bg-blue-50/80 rounded-2xl text-blue-600 group-hover:bg-blue-600 group-hover:text-white transition-colors shadow-sm">
                        <Glyph icon=project.icon size=26 />
                    </div>
                    {project
                        .highlight
                        .as_deref()
                        .map(|h| {
                            view! {
                                <div class="flex items-center gap-1.5 px-3 py-1 rounded-full bg-blue-50 text-blue-700 text-xs font-bold border border-blue-100">
                                    <Glyph icon=Icon::Rocket size=12 />
                                    {h}
                                </div>
                            }
                        })}
                </div>
                <h3 class="text-xl font-bold text-slate-900 mb-3 group-hover:text-blue-600 transition-colors">
                    {project.title.as_str()}
                </h3>
                <p class="text-slate-600 text-sm leading-7 mb-6 flex-grow">
                    {project.description.as_str()}
                </p>
                <div class="pt-6 border-t border-slate-50 flex flex-wrap gap-2 mt-auto">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            let look = if section.is_featured(tag) {
                                "bg-blue-50 text-blue-700 border-blue-100 font-bold"
                            } else {
                                "bg-slate-50 text-slate-500 border-slate-100"
                            };
                            view! {
                                <span class=format!(
                                    "text-[11px] font-medium px-2.5 py-1 rounded-md border {look}",
                                )>{tag.as_str()}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
