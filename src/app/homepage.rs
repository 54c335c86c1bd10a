use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::ContactSection;
use super::modal::Modal;
use super::projects::{Project, ProjectCard, ProjectDetail, PROJECTS};

struct Role {
    company: &'static str,
    role: &'static str,
    period: &'static str,
    bullets: &'static [&'static str],
}

static EXPERIENCE: &[Role] = &[
    Role {
        company: "Zlyzer",
        role: "Founder & Full-Stack Engineer",
        period: "2023 – Present",
        bullets: &[
            "Shipped an AI analytics product from prototype to paying customers",
            "Own the data pipeline, model services and product UI",
        ],
    },
    Role {
        company: "Freelance",
        role: "Full-Stack Developer",
        period: "2020 – 2023",
        bullets: &["Built MVPs for early-stage founders across web and mobile"],
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let (selected, set_selected) = signal(None::<Project>);

    view! {
        <Title text="Portfolio" />
        <section id="hero" class="py-24">
            <h1 class="text-4xl lg:text-5xl font-bold leading-tight">
                "Ahmed Ali - Full-Stack Developer & AI Builder"
            </h1>
            <p class="mt-4 text-lg text-muted max-w-3xl">
                "I build AI-driven, user-centric products across web & mobile, from fast MVPs to scaled platforms."
            </p>
            <div class="mt-8 flex flex-wrap gap-4">
                <a href="#projects" class="rounded-md border border-cyan/30 bg-cyan/20 px-6 py-3 text-cyan">
                    "View Projects"
                </a>
                <a href="#contact" class="rounded-md border border-muted/30 px-6 py-3">
                    "Contact Me"
                </a>
            </div>
        </section>

        <Section id="projects" title="Featured Projects">
            <div class="grid gap-6 md:grid-cols-2">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <ProjectCard
                                project=project.clone()
                                on_open=move |p: Project| set_selected(Some(p))
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </Section>

        <Section id="experience" title="Experience">
            <ul class="space-y-8">
                {EXPERIENCE
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="rounded-lg border border-muted/30 p-6">
                                <div class="flex flex-wrap items-baseline gap-3">
                                    <h3 class="text-xl font-bold">{item.role}</h3>
                                    <span class="text-sm uppercase text-muted">{item.company}</span>
                                    <span class="text-xs text-muted">{item.period}</span>
                                </div>
                                <ul class="mt-2 list-disc pl-5 text-sm">
                                    {item
                                        .bullets
                                        .iter()
                                        .map(|b| view! { <li>{*b}</li> })
                                        .collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Section>

        <Section id="about" title="About">
            <p class="text-base leading-relaxed max-w-3xl">
                "Founder of Zlyzer and a full-stack developer who turns fuzzy ideas into shipped, scalable products. "
                "B.Sc. in Information Systems, Faculty of Computers and Artificial Intelligence, Cairo University."
            </p>
        </Section>

        <Section id="contact" title="Contact">
            <ContactSection />
        </Section>

        <Modal
            open=Signal::derive(move || selected.with(Option::is_some))
            title=Signal::derive(move || {
                selected.with(|p| p.as_ref().map(|p| p.title.to_string()).unwrap_or_default())
            })
            on_close=move |_| set_selected(None)
        >
            {move || selected.get().map(|project| view! { <ProjectDetail project /> })}
        </Modal>
    }
}

#[component]
fn Section(id: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section id=id class="py-16">
            <h2 class="text-2xl font-bold mb-8">{title}</h2>
            {children()}
        </section>
    }
}
