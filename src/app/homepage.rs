use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::content::{
    portfolio, AnchorLink, Award, ExperienceItem, FitItem, Icon, Portfolio, ProjectSection,
    Section, Workflow, ABOUT_ANCHOR,
};

use super::cards::{
    AwardCard, ExperienceCard, FitCard, Glyph, ProjectCard, Runs, SectionHeading, SkillPill,
    StatCard,
};
use super::contact_pill::ContactPill;
use super::{BackgroundPattern, ContentNotice, SiteFooter, TopNav};

#[component]
pub fn HomePage() -> impl IntoView {
    match portfolio() {
        Ok(portfolio) => Either::Left(view! { <PortfolioPage portfolio /> }),
        Err(err) => Either::Right(view! { <ContentNotice err /> }),
    }
}

#[component]
fn PortfolioPage(portfolio: &'static Portfolio) -> impl IntoView {
    let profile = &portfolio.profile;
    let nav = portfolio.nav.as_slice();
    let fit = &portfolio.fit;
    let experience = &portfolio.experience;
    let campus = &portfolio.campus;
    let projects = &portfolio.projects;
    let footer = &portfolio.footer;

    view! {
        <Title text=format!("{} | {}", profile.name, profile.role) />
        <div class="min-h-screen font-sans text-slate-800 selection:bg-blue-100 relative">
            <BackgroundPattern />
            <TopNav profile links=nav />
            <main class="max-w-6xl mx-auto px-6 pt-32 pb-24 space-y-24">
                <Hero portfolio />
                <FitSection section=fit />
                <ExperienceSection section=experience />
                <CampusSection section=campus />
                <ProjectsSection projects />
            </main>
            <SiteFooter name=profile.name.as_str() footer />
        </div>
    }
}

#[component]
fn Hero(portfolio: &'static Portfolio) -> impl IntoView {
    let profile = &portfolio.profile;
    let workflow = &portfolio.workflow;
    let feedback = portfolio.settings.copy_feedback();

    view! {
        <header id=ABOUT_ANCHOR class="grid lg:grid-cols-12 gap-12 lg:gap-16 items-center">
            <div class="lg:col-span-7 space-y-8">
                <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-blue-50 text-blue-700 text-xs font-bold border border-blue-100 animate-fade-in">
                    <span class="relative flex h-2 w-2">
                        <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-blue-400 opacity-75"></span>
                        <span class="relative inline-flex rounded-full h-2 w-2 bg-blue-500"></span>
                    </span>
                    {profile.badge.as_str()}
                </div>
                <h1 class="text-5xl sm:text-6xl font-extrabold text-slate-900 leading-[1.1] tracking-tight">
                    {profile.headline.as_str()}
                    <br />
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-600 to-indigo-600">
                        {profile.headline_accent.as_str()}
                    </span>
                </h1>
                <div class="text-lg text-slate-600 leading-relaxed max-w-xl">
                    {profile
                        .intro
                        .iter()
                        .map(|paragraph| {
                            view! {
                                <p class="mb-4">
                                    <Runs runs=paragraph.as_slice() />
                                </p>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-col sm:flex-row gap-4 w-full max-w-md">
                    {profile
                        .contacts
                        .iter()
                        .map(|entry| view! { <ContactPill entry feedback /> })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap gap-4 pt-2">
                    {profile
                        .calls_to_action
                        .iter()
                        .map(|link| view! { <CallToAction link /> })
                        .collect_view()}
                </div>
            </div>
            <div class="lg:col-span-5 h-full min-h-[400px]">
                <div class="grid grid-cols-2 gap-5 h-full">
                    <WorkflowPanel workflow />
                    {portfolio
                        .stats
                        .iter()
                        .map(|stat| view! { <StatCard stat /> })
                        .collect_view()}
                </div>
            </div>
        </header>
    }
}

#[component]
fn CallToAction(link: &'static AnchorLink) -> impl IntoView {
    let look = if link.primary {
        "bg-slate-900 text-white hover:bg-slate-800 shadow-xl shadow-slate-900/20"
    } else {
        "bg-white text-slate-700 border border-slate-200 hover:border-blue-300 hover:bg-blue-50/30"
    };
    view! {
        <a
            href=format!("#{}", link.target)
            class=format!(
                "flex items-center gap-2 px-7 py-3.5 font-semibold rounded-2xl transition active:scale-95 {look}",
            )
        >
            {link.icon.map(|icon| view! { <Glyph icon size=18 /> })}
            {link.label.as_str()}
        </a>
    }
}

#[component]
fn WorkflowPanel(workflow: &'static Workflow) -> impl IntoView {
    view! {
        <div class="col-span-2 bg-white/90 backdrop-blur p-6 rounded-2xl border border-blue-100 shadow-sm flex flex-col justify-center gap-4 hover:shadow-lg transition-shadow relative overflow-hidden">
            <div class="absolute top-0 right-0 p-3 opacity-10">
                <Glyph icon=Icon::Terminal size=100 />
            </div>
            <div class="flex items-center gap-2 text-xs font-bold text-blue-500 uppercase tracking-widest relative z-10">
                <Glyph icon=Icon::Zap size=12 />
                {workflow.title.as_str()}
            </div>
            <div class="flex flex-wrap gap-2.5 relative z-10">
                {workflow.skills.iter().map(|skill| view! { <SkillPill skill /> }).collect_view()}
            </div>
            {workflow
                .note
                .as_deref()
                .map(|note| view! { <p class="text-xs text-slate-400 mt-1 relative z-10">{note}</p> })}
        </div>
    }
}

#[component]
fn FitSection(section: &'static Section<FitItem>) -> impl IntoView {
    view! {
        <section id=section.id.as_str() class="scroll-mt-24">
            <div class="flex items-center gap-3 mb-8">
                <Glyph icon=Icon::Target size=28 accent="text-blue-600" />
                <h2 class="text-2xl font-bold text-slate-900">{section.title.as_str()}</h2>
            </div>
            <div class="grid md:grid-cols-2 gap-4">
                {section.items.iter().map(|item| view! { <FitCard item /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ExperienceSection(section: &'static Section<ExperienceItem>) -> impl IntoView {
    view! {
        <section id=section.id.as_str() class="scroll-mt-24">
            <SectionHeading
                title=section.title.as_str()
                subtitle=section.subtitle.as_deref()
                rule=true
            />
            <div class="space-y-6">
                {section.items.iter().map(|item| view! { <ExperienceCard item /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CampusSection(section: &'static Section<Award>) -> impl IntoView {
    view! {
        <section id=section.id.as_str() class="scroll-mt-24">
            <SectionHeading
                title=section.title.as_str()
                subtitle=section.subtitle.as_deref()
                rule=true
            />
            <div class="grid md:grid-cols-3 gap-6">
                {section.items.iter().map(|award| view! { <AwardCard award /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection(projects: &'static ProjectSection) -> impl IntoView {
    let section = &projects.section;
    view! {
        <section id=section.id.as_str() class="scroll-mt-24">
            <SectionHeading title=section.title.as_str() subtitle=section.subtitle.as_deref() />
            <div class="grid md:grid-cols-3 gap-6 lg:gap-8">
                {section
                    .items
                    .iter()
                    .map(|project| view! { <ProjectCard project section=projects /> })
                    .collect_view()}
            </div>
        </section>
    }
}
