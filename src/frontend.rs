use gloo_timers::callback::Interval;
use serde_json::json;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Document, Event, MouseEvent, Window};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::{
    Contact, Highlight, Role, ACHIEVEMENTS, ACHIEVEMENT_PREFIX, AVAILABILITY, CONTACTS,
    CONTACT_PREFIX, CONTACT_TITLE_REGION, COPYRIGHT_YEAR, EDUCATION, EDUCATION_PREFIX,
    EDUCATION_TITLE_REGION, EXPERIENCE_TITLE_REGION, FEATURED_ROLE, METRIC_CARDS, NAV_LINKS,
    OTHER_ROLES, OWNER_FULL_NAME, OWNER_NAME, PROJECTS, PROJECTS_TITLE_REGION, PROJECT_PREFIX,
    SKILLS, SKILLS_TITLE_REGION, SKILL_PREFIX, tracked_regions,
};
use crate::counters::{CounterAnimator, MetricValues, METRICS_REGION};
use crate::logging::{log_event, LogLevel};
use crate::page::{reduce_page, start_counter_run, PageAction, PageState};
use crate::pointer::PointerPosition;
use crate::reveal::{nav_is_scrolled, RegionGeometry, RegionId, RevealedSet, VisibilityTracker};

const FALLBACK_VIEWPORT_HEIGHT: f64 = 720.0;

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        reduce_page(self, action)
    }
}

fn viewport_height(win: &Window) -> f64 {
    win.inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_HEIGHT)
}

fn page_href() -> Option<String> {
    window()?.location().href().ok()
}

struct DomGeometry {
    document: Document,
    viewport_height: f64,
}

impl RegionGeometry for DomGeometry {
    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn region_top(&self, id: &RegionId) -> Option<f64> {
        self.document
            .get_element_by_id(id.as_str())
            .map(|element| element.get_bounding_client_rect().top())
    }
}

// Removes the listener on drop.
struct WindowListener {
    target: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    fn new(target: &Window, event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

fn refresh_scroll_state(
    tracker: &RefCell<VisibilityTracker>,
    dispatcher: &UseReducerDispatcher<PageState>,
    config: &SiteConfig,
) {
    let Some(win) = window() else {
        return;
    };
    let Some(document) = win.document() else {
        return;
    };

    let scroll_y = win.scroll_y().unwrap_or(0.0);
    dispatcher.dispatch(PageAction::Scrolled {
        nav_scrolled: nav_is_scrolled(scroll_y, config.nav_scrolled_offset_px),
    });

    let geometry = DomGeometry {
        viewport_height: viewport_height(&win),
        document,
    };
    let newly_revealed = tracker.borrow_mut().scan(&geometry);
    if newly_revealed.is_empty() {
        return;
    }

    log_event(
        config.log_level,
        LogLevel::Debug,
        "regions_revealed",
        json!({ "regions": newly_revealed, "scroll_y": scroll_y }),
    );
    dispatcher.dispatch(PageAction::Revealed(newly_revealed));
}

fn reveal_classes(revealed: bool, hidden: &'static str) -> Classes {
    classes!(
        "fade-in",
        if revealed { "is-visible" } else { hidden }
    )
}

fn stagger_style(index: usize, step_ms: usize) -> String {
    format!("transition-delay: {}ms;", index * step_ms)
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    scrolled: bool,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class={classes!("site-nav", props.scrolled.then_some("is-scrolled"))}>
            <div class="nav-inner">
                <div class="nav-name">{OWNER_NAME}</div>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.anchor}>{link.label}</a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-orbs" aria-hidden="true">
                <div class="orb orb-blue"></div>
                <div class="orb orb-purple"></div>
            </div>
            <div class="hero-copy">
                <div class="rise" style="animation-delay: 0.2s;">
                    <span class="pill">{AVAILABILITY}</span>
                </div>
                <h1 class="hero-title rise" style="animation-delay: 0.4s;">
                    <span class="gradient-text">{"Backend Engineer."}</span>
                    <br />
                    <span class="gradient-text alt">{"Systems Builder."}</span>
                </h1>
                <p class="hero-lede rise" style="animation-delay: 0.6s;">
                    {"3+ years building high-scale distributed systems."}
                    <br />
                    {"Specializing in reliability, performance, and event-driven architectures."}
                </p>
                <div class="hero-actions rise" style="animation-delay: 0.8s;">
                    <a class="button primary" href="#contact">{"Get in touch"}</a>
                    <a class="button ghost" href="#experience">{"View work"}</a>
                </div>
            </div>
            <div class="scroll-cue" aria-hidden="true">{"›"}</div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    revealed: Rc<RevealedSet>,
}

#[derive(Properties, PartialEq)]
struct ExperienceProps {
    revealed: Rc<RevealedSet>,
    counters: MetricValues,
}

fn role_html(role: &Role, counters: &MetricValues, featured: bool) -> Html {
    let highlight = match role.highlight.highlight {
        Highlight::Counter(kind) => counters.label(kind),
        Highlight::Static(text) => text.to_string(),
    };

    html! {
        <div class="role-header">
            <div>
                <div class={classes!("role-period", role.highlight.accent)}>{role.period}</div>
                <h3 class={classes!("role-title", featured.then_some("featured"))}>{role.title}</h3>
                <p class="role-company">{role.company}</p>
                <p class="muted">{role.location}</p>
            </div>
            <div class={classes!("highlight-card", role.highlight.accent)}>
                <div class="highlight-value">{highlight}</div>
                <div class="highlight-caption">{role.highlight.caption}</div>
                <div class="highlight-detail">{role.highlight.detail}</div>
            </div>
            if let Some(summary) = role.summary {
                <p class="role-summary">{summary}</p>
            }
        </div>
    }
}

#[function_component(ExperienceSection)]
fn experience_section(props: &ExperienceProps) -> Html {
    let revealed = &props.revealed;
    let counters = &props.counters;

    html! {
        <section id="experience" class="section">
            <div class="section-inner">
                <h2
                    id={EXPERIENCE_TITLE_REGION}
                    class={classes!("section-title", reveal_classes(revealed.contains(EXPERIENCE_TITLE_REGION), "from-below"))}
                >
                    {"Experience"}
                </h2>

                <div
                    id={FEATURED_ROLE.region}
                    class={classes!("role", "featured", reveal_classes(revealed.contains(FEATURED_ROLE.region), "from-below"))}
                >
                    { role_html(&FEATURED_ROLE, counters, true) }

                    <div
                        id={METRICS_REGION}
                        class={classes!("metric-grid", reveal_classes(revealed.contains(METRICS_REGION), "from-below"))}
                    >
                        { for METRIC_CARDS.iter().map(|card| html! {
                            <div class={classes!("metric-card", card.accent)}>
                                <div class="metric-value">{counters.label(card.kind)}</div>
                                <div class="metric-caption">{card.caption}</div>
                                <div class="metric-detail">{card.detail}</div>
                            </div>
                        }) }
                    </div>

                    <div class="achievements">
                        { for ACHIEVEMENTS.iter().enumerate().map(|(index, text)| {
                            let id = RegionId::indexed(ACHIEVEMENT_PREFIX, index);
                            html! {
                                <div
                                    id={id.to_string()}
                                    class={classes!("achievement", reveal_classes(revealed.contains(id.as_str()), "from-left"))}
                                    style={stagger_style(index, 100)}
                                >
                                    <div class="bullet"></div>
                                    <p>{*text}</p>
                                </div>
                            }
                        }) }
                    </div>
                </div>

                { for OTHER_ROLES.iter().map(|role| html! {
                    <div
                        id={role.region}
                        class={classes!("role", reveal_classes(revealed.contains(role.region), "from-below"))}
                    >
                        { role_html(role, counters, false) }
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(SkillsSection)]
fn skills_section(props: &SectionProps) -> Html {
    let revealed = &props.revealed;

    html! {
        <section class="section tinted-blue">
            <div class="section-inner">
                <h2
                    id={SKILLS_TITLE_REGION}
                    class={classes!("section-title", reveal_classes(revealed.contains(SKILLS_TITLE_REGION), "from-below"))}
                >
                    {"Technical Expertise"}
                </h2>
                <div class="skill-grid">
                    { for SKILLS.iter().enumerate().map(|(index, skill)| {
                        let id = RegionId::indexed(SKILL_PREFIX, index);
                        html! {
                            <div
                                key={skill.category}
                                id={id.to_string()}
                                class={classes!("skill-card", reveal_classes(revealed.contains(id.as_str()), "from-below"))}
                                style={stagger_style(index, 100)}
                            >
                                <div class="skill-icon">{skill.icon}</div>
                                <h3>{skill.category}</h3>
                                <ul>
                                    { for skill.items.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                                </ul>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ProjectsSection)]
fn projects_section(props: &SectionProps) -> Html {
    let revealed = &props.revealed;

    html! {
        <section id="projects" class="section">
            <div class="section-inner">
                <h2
                    id={PROJECTS_TITLE_REGION}
                    class={classes!("section-title", reveal_classes(revealed.contains(PROJECTS_TITLE_REGION), "from-below"))}
                >
                    {"Featured Projects"}
                </h2>
                <div class="project-grid">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| {
                        let id = RegionId::indexed(PROJECT_PREFIX, index);
                        html! {
                            <a
                                key={project.name}
                                href={project.link}
                                id={id.to_string()}
                                class={classes!("project-card", reveal_classes(revealed.contains(id.as_str()), "from-below"))}
                                style={stagger_style(index, 150)}
                            >
                                <div class={classes!("project-glow", project.gradient)}></div>
                                <div class="project-body">
                                    <h3>{project.name}</h3>
                                    <p class="project-tagline">{project.tagline}</p>
                                    <p class="muted">{project.description}</p>
                                    <div class="project-impact">{project.impact}</div>
                                    <div class="project-tech">{project.tech}</div>
                                    <div class="project-cta">{"View project →"}</div>
                                </div>
                            </a>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(EducationSection)]
fn education_section(props: &SectionProps) -> Html {
    let revealed = &props.revealed;

    html! {
        <section class="section tinted-purple">
            <div class="section-inner">
                <h2
                    id={EDUCATION_TITLE_REGION}
                    class={classes!("section-title", reveal_classes(revealed.contains(EDUCATION_TITLE_REGION), "from-below"))}
                >
                    {"Education"}
                </h2>
                <div class="education-grid">
                    { for EDUCATION.iter().enumerate().map(|(index, education)| {
                        let id = RegionId::indexed(EDUCATION_PREFIX, index);
                        html! {
                            <div
                                key={education.school}
                                id={id.to_string()}
                                class={classes!("education-card", reveal_classes(revealed.contains(id.as_str()), "scaled-down"))}
                                style={stagger_style(index, 200)}
                            >
                                <div class="education-icon">{"🎓"}</div>
                                <h3>{education.school}</h3>
                                <p class="education-degree">{education.degree}</p>
                                <p class="muted">{education.years}</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

fn contact_link(index: usize, contact: &Contact, revealed: &RevealedSet) -> Html {
    let id = RegionId::indexed(CONTACT_PREFIX, index);
    let new_tab = contact.opens_new_tab();

    html! {
        <a
            key={contact.label}
            href={contact.href}
            target={new_tab.then_some("_blank")}
            rel={new_tab.then_some("noopener noreferrer")}
            id={id.to_string()}
            class={classes!("contact-card", reveal_classes(revealed.contains(id.as_str()), "from-below"))}
            style={stagger_style(index, 100)}
        >
            <span class="contact-icon" aria-hidden="true">{contact.icon.glyph()}</span>
            <span class="contact-label">{contact.label}</span>
        </a>
    }
}

#[function_component(ContactSection)]
fn contact_section(props: &SectionProps) -> Html {
    let revealed = &props.revealed;

    html! {
        <section id="contact" class="section">
            <div class="section-inner narrow">
                <h2
                    id={CONTACT_TITLE_REGION}
                    class={classes!("section-title", reveal_classes(revealed.contains(CONTACT_TITLE_REGION), "from-below"))}
                >
                    {"Let's connect."}
                </h2>
                <p class="contact-lede">
                    {"Open to SWE1/2 opportunities in backend engineering and distributed systems."}
                </p>
                <div class="contact-grid">
                    { for CONTACTS.iter().enumerate().map(|(index, contact)| contact_link(index, contact, revealed)) }
                </div>
                <footer class="site-footer">{format!("© {COPYRIGHT_YEAR} {OWNER_FULL_NAME}")}</footer>
            </div>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| {
        page_href()
            .map(|href| SiteConfig::from_page_url(&href))
            .unwrap_or_default()
    });
    let state = use_reducer(PageState::default);
    let tracker = {
        let config = config.clone();
        use_mut_ref(move || VisibilityTracker::new(tracked_regions(), config.reveal_threshold))
    };
    let animator = {
        let config = config.clone();
        use_mut_ref(move || CounterAnimator::new(config.counter_steps))
    };

    {
        let dispatcher = state.dispatcher();
        let tracker = tracker.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            let listeners = window().map(|win| {
                let on_scroll = {
                    let dispatcher = dispatcher.clone();
                    let tracker = tracker.clone();
                    let config = config.clone();
                    move |_: Event| refresh_scroll_state(&tracker, &dispatcher, &config)
                };
                let on_pointer = {
                    let dispatcher = dispatcher.clone();
                    move |event: Event| {
                        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                            dispatcher.dispatch(PageAction::PointerMoved(PointerPosition::from_client(
                                mouse.client_x(),
                                mouse.client_y(),
                            )));
                        }
                    }
                };

                (
                    WindowListener::new(&win, "scroll", on_scroll),
                    WindowListener::new(&win, "mousemove", on_pointer),
                )
            });

            refresh_scroll_state(&tracker, &dispatcher, &config);
            log_event(
                config.log_level,
                LogLevel::Info,
                "page_mounted",
                json!({
                    "pending_regions": tracker.borrow().pending().len(),
                    "reveal_threshold": config.reveal_threshold,
                }),
            );

            move || drop(listeners)
        });
    }

    {
        let triggered = state.counters_triggered();
        let finished = state.counters_finished;
        let dispatcher = state.dispatcher();
        let animator = animator.clone();
        let config = config.clone();
        use_effect_with((triggered, finished), move |&(triggered, finished)| {
            let started = start_counter_run(triggered, finished, &mut animator.borrow_mut());
            let interval = started.then(|| {
                log_event(
                    config.log_level,
                    LogLevel::Info,
                    "metrics_animation_started",
                    json!({
                        "steps": config.counter_steps,
                        "interval_ms": config.counter_interval_ms(),
                    }),
                );

                let animator = animator.clone();
                let config = config.clone();
                Interval::new(config.counter_interval_ms(), move || {
                    let (values, finished) = {
                        let mut animator = animator.borrow_mut();
                        (animator.tick(), animator.is_finished())
                    };
                    let Some(values) = values else {
                        return;
                    };

                    if finished {
                        log_event(
                            config.log_level,
                            LogLevel::Info,
                            "metrics_animation_finished",
                            json!({ "values": values.to_json() }),
                        );
                    }
                    dispatcher.dispatch(PageAction::CountersStepped { values, finished });
                })
            });

            move || {
                let Some(interval) = interval else {
                    return;
                };
                drop(interval);
                let cancelled = animator.borrow_mut().cancel();
                if cancelled {
                    let animator = animator.borrow();
                    log_event(
                        config.log_level,
                        LogLevel::Info,
                        "metrics_animation_cancelled",
                        json!({ "step": animator.step(), "values": animator.values().to_json() }),
                    );
                }
            }
        });
    }

    html! {
        <div class="page">
            <div class="cursor-glow" style={state.pointer.glow_style()} aria-hidden="true"></div>
            <NavBar scrolled={state.nav_scrolled} />
            <Hero />
            <ExperienceSection revealed={state.revealed.clone()} counters={state.counters} />
            <SkillsSection revealed={state.revealed.clone()} />
            <ProjectsSection revealed={state.revealed.clone()} />
            <EducationSection revealed={state.revealed.clone()} />
            <ContactSection revealed={state.revealed.clone()} />
        </div>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
