use leptos::{html, prelude::*};

use super::modal::use_focusable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Ai,
    Mobile,
}

impl Category {
    fn label(self) -> &'static str {
        match self {
            Category::Ai => "AI",
            Category::Mobile => "Mobile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Media {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub stack: &'static [&'static str],
    pub links: &'static [Link],
    pub responsibilities: &'static [&'static str],
    pub outcomes: &'static [&'static str],
    pub media: &'static [Media],
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "zlyzer",
        title: "Zlyzer Analytics",
        category: Category::Ai,
        description: "Model-driven insight platform turning raw product events into weekly decisions.",
        stack: &["Next.js", "Python", "Supabase", "OpenAI"],
        links: &[Link {
            label: "Live",
            href: "https://zlyzer.com",
        }],
        responsibilities: &[
            "Designed the ingest pipeline and event schema",
            "Built the summarization service and dashboard",
        ],
        outcomes: &["Cut weekly reporting time from hours to minutes"],
        media: &[
            Media {
                src: "/images/zlyzer-dashboard.png",
                alt: "Zlyzer dashboard overview",
            },
            Media {
                src: "/images/zlyzer-report.png",
                alt: "Generated weekly report",
            },
        ],
    },
    Project {
        id: "fieldnotes",
        title: "Fieldnotes",
        category: Category::Mobile,
        description: "Offline-first note taking for field researchers with sync on reconnect.",
        stack: &["React Native", "TypeScript", "SQLite"],
        links: &[Link {
            label: "Repo",
            href: "https://github.com/Abuzaid911/fieldnotes",
        }],
        responsibilities: &["Sync protocol and conflict handling", "Mobile UI"],
        outcomes: &["Used daily by a team of 40 researchers"],
        media: &[Media {
            src: "/images/fieldnotes.png",
            alt: "Fieldnotes note editor",
        }],
    },
];

#[component]
pub fn ProjectCard(project: Project, #[prop(into)] on_open: Callback<Project>) -> impl IntoView {
    let stack = project.stack;
    let (title, category, description) = (project.title, project.category, project.description);
    view! {
        <article class="rounded-lg border border-muted/30 bg-brightBlack/30 p-6">
            <p class="text-xs uppercase tracking-wide text-muted">{category.label()}</p>
            <h3 class="mt-2 text-xl font-bold">{title}</h3>
            <p class="mt-2 text-sm">{description}</p>
            <ul class="mt-4 flex flex-wrap gap-2 text-xs">
                {stack
                    .iter()
                    .map(|s| view! { <li class="rounded-full border border-muted/30 px-2 py-1">{*s}</li> })
                    .collect_view()}
            </ul>
            <button
                type="button"
                class="mt-6 text-cyan hover:text-brightCyan"
                on:click=move |_| on_open.run(project.clone())
            >
                "View details →"
            </button>
        </article>
    }
}

/// Position in a project's screenshots. Moves clamp at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stepper {
    index: usize,
    len: usize,
}

impl Stepper {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn prev(self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
            ..self
        }
    }

    pub fn next(self) -> Self {
        self.go_to(self.index + 1)
    }

    pub fn go_to(self, index: usize) -> Self {
        Self {
            index: index.min(self.len.saturating_sub(1)),
            ..self
        }
    }

    pub fn at_start(self) -> bool {
        self.index == 0
    }

    pub fn at_end(self) -> bool {
        self.index + 1 >= self.len
    }
}

/// Body of the project dialog, with a screenshot stepper.
///
/// A new body is built for every opened project, so the stepper always
/// starts at the first screenshot.
#[component]
pub fn ProjectDetail(project: Project) -> impl IntoView {
    let media = project.media;
    let stepper = RwSignal::new(Stepper::new(media.len()));
    let prev_ref = NodeRef::<html::Button>::new();
    let next_ref = NodeRef::<html::Button>::new();
    let slide_refs = if media.len() > 1 {
        use_focusable(prev_ref);
        use_focusable(next_ref);
        media
            .iter()
            .map(|_| {
                let slide_ref = NodeRef::<html::Button>::new();
                use_focusable(slide_ref);
                slide_ref
            })
            .collect::<Vec<_>>()
    } else {
        Vec::new()
    };

    let links = project
        .links
        .iter()
        .map(|link| view! { <ProjectLink link /> })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div>
                <div class="relative h-56 overflow-hidden rounded-lg border border-muted/30">
                    {move || {
                        media
                            .get(stepper.get().index())
                            .map(|m| {
                                view! { <img src=m.src alt=m.alt class="h-full w-full object-cover" /> }
                            })
                    }}
                    {(media.len() > 1)
                        .then(|| {
                            view! {
                                <div class="absolute inset-x-4 bottom-4 flex items-center justify-between">
                                    <button
                                        node_ref=prev_ref
                                        type="button"
                                        aria-label="Previous screenshot"
                                        class="h-9 w-9 rounded-full bg-black/60 disabled:opacity-40"
                                        disabled=move || stepper.get().at_start()
                                        on:click=move |_| stepper.update(|s| *s = s.prev())
                                    >
                                        "←"
                                    </button>
                                    <button
                                        node_ref=next_ref
                                        type="button"
                                        aria-label="Next screenshot"
                                        class="h-9 w-9 rounded-full bg-black/60 disabled:opacity-40"
                                        disabled=move || stepper.get().at_end()
                                        on:click=move |_| stepper.update(|s| *s = s.next())
                                    >
                                        "→"
                                    </button>
                                </div>
                            }
                        })}
                </div>
                {(!slide_refs.is_empty())
                    .then(|| {
                        view! {
                            <div class="mt-3 flex items-center justify-center gap-2">
                                {slide_refs
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, slide_ref)| {
                                        view! {
                                            <button
                                                node_ref=slide_ref
                                                type="button"
                                                aria-label=format!("Go to slide {}", i + 1)
                                                class=move || {
                                                    if stepper.get().index() == i {
                                                        "h-2.5 w-2.5 rounded-full transition bg-cyan"
                                                    } else {
                                                        "h-2.5 w-2.5 rounded-full transition bg-muted/60"
                                                    }
                                                }
                                                on:click=move |_| stepper.update(|s| *s = s.go_to(i))
                                            ></button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
            <p>{project.description}</p>
            <DetailList title="Responsibilities" items=project.responsibilities />
            <DetailList title="Outcomes" items=project.outcomes />
            <div class="flex gap-4">{links}</div>
        </div>
    }
}

#[component]
fn ProjectLink(link: &'static Link) -> impl IntoView {
    let link_ref = NodeRef::<html::A>::new();
    use_focusable(link_ref);
    view! {
        <a
            node_ref=link_ref
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            class="text-cyan hover:text-brightCyan"
        >
            {link.label}
            " ↗"
        </a>
    }
}

#[component]
fn DetailList(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-bold mb-2">{title}</h4>
            <ul class="list-disc pl-5 space-y-1">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_ids_are_unique() {
        let mut ids = PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_projects_have_media() {
        assert!(PROJECTS.iter().all(|p| !p.media.is_empty()));
    }

    #[test]
    fn test_every_category_has_a_project() {
        for category in [Category::Ai, Category::Mobile] {
            assert!(PROJECTS.iter().any(|p| p.category == category));
        }
    }

    #[test]
    fn test_stepper_single_screenshot() {
        let s = Stepper::new(1);
        assert!(s.at_start());
        assert!(s.at_end());
        assert_eq!(s.next().index(), 0);
        assert_eq!(s.prev().index(), 0);
        assert_eq!(s.go_to(3).index(), 0);
    }

    #[test]
    fn test_stepper_first_screenshot() {
        let s = Stepper::new(3);
        assert_eq!(s.index(), 0);
        assert!(s.at_start());
        assert!(!s.at_end());
        assert_eq!(s.prev(), s);
        assert_eq!(s.next().index(), 1);
    }

    #[test]
    fn test_stepper_last_screenshot() {
        let s = Stepper::new(3).next().next();
        assert_eq!(s.index(), 2);
        assert!(!s.at_start());
        assert!(s.at_end());
        assert_eq!(s.next(), s);
        assert_eq!(s.prev().index(), 1);
    }

    #[test]
    fn test_stepper_middle_screenshot() {
        let s = Stepper::new(3).go_to(1);
        assert!(!s.at_start());
        assert!(!s.at_end());
        assert_eq!(s.prev().index(), 0);
        assert_eq!(s.next().index(), 2);
    }

    #[test]
    fn test_stepper_jump_clamps_to_last() {
        assert_eq!(Stepper::new(2).go_to(5).index(), 1);
    }

    #[test]
    fn test_new_stepper_starts_at_first_screenshot() {
        // every opened project gets a fresh stepper
        let zlyzer = &PROJECTS[0];
        let moved = Stepper::new(zlyzer.media.len()).next();
        assert_eq!(moved.index(), 1);
        let fieldnotes = &PROJECTS[1];
        assert_eq!(Stepper::new(fieldnotes.media.len()).index(), 0);
    }
}
