use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::state::{AppState, Section};
use crate::model::Palette;

pub mod components;
pub mod education;
pub mod experience;
pub mod profile;
pub mod skills;

pub use education::render_education;
pub use experience::render_experience;
pub use profile::render_profile;
pub use skills::render_skills;

/// Main view dispatcher.
/// Header, optional banner, the current section and the footer, top to
/// bottom. Overlays the section menu and help if active.
pub fn render(state: &AppState, frame: &mut Frame) {
    let palette = state.theme.palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let banner_height = if components::banner_visible(state) { 1 } else { 0 };
    let [header, banner, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(banner_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    components::render_header(frame, header, state);
    if banner_height > 0 {
        components::render_banner(frame, banner, state);
    }

    match state.section {
        Section::Profile => profile::render_profile(frame, body, state),
        Section::Experience => experience::render_experience(frame, body, state),
        Section::Education => education::render_education(frame, body, state),
        Section::Skills => skills::render_skills(frame, body, state),
    }

    components::render_footer(frame, footer, state);

    // Overlays, help on top
    components::render_menu_popup(frame, state);
    if state.show_help {
        components::render_help_overlay(frame, palette);
    }
}

/// Bordered block shared by every section body.
fn section_block(title: &'static str, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.panel_border))
        .title(Line::styled(
            format!(" {} ", title),
            Style::default()
                .fg(palette.heading)
                .add_modifier(Modifier::BOLD),
        ))
}

/// Placeholder for a section whose content file is missing or empty.
fn render_empty(frame: &mut Frame, area: Rect, title: &'static str, message: &str, palette: &Palette) {
    let paragraph = Paragraph::new(Line::from(message.to_string()))
        .block(section_block(title, palette))
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.muted_text));
    frame.render_widget(paragraph, area);
}

/// Final path component of an asset path, for display.
fn asset_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;

    use crate::app::AppState;
    use crate::model::{
        Company, Contact, Education, EducationItem, Experience, Link, Logo, ProficiencyItem,
        Profile, Role, SiteData, SkillCategory, SkillGroup, SkillItem, Skills, Summary,
    };

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 19).unwrap()
    }

    pub fn site() -> SiteData {
        let mut lead = Role::new("Lead Data Scientist").with_dates("2022-01", "present", "Jan 2022 - Present");
        lead.responsibilities = vec!["Built forecasting models".into()];

        let mut acme = Company::new("Acme Analytics")
            .with_role(lead)
            .with_role(Role::new("Data Scientist").with_dates("2019-06", "2021-03", "Jun 2019 - Mar 2021"));
        acme.location = "Zürich".into();
        acme.logo = Logo {
            default: "assets/acme.svg".into(),
            light: Some("assets/acme-light.svg".into()),
            dark: Some("assets/acme-dark.svg".into()),
        };

        let mut msc = EducationItem::new("ETH Zürich", "MSc Statistics").with_dates("2017", "2019", "2017 - 2019");
        msc.grade = Some("5.5 / 6".into());

        SiteData {
            profile: Some(Profile::new("Jane Doe", "Statistician").with_contact(Contact {
                email: Some("jane@example.com".into()),
                phone: Some("+41 44 000 00 00".into()),
                location: Some("Zürich".into()),
                linkedin: Some(Link {
                    url: "https://linkedin.com/in/janedoe".into(),
                    label: "janedoe".into(),
                }),
            })),
            summary: Some(Summary {
                content: "Statistician with a love for clean data.\nBased in Zürich.".into(),
            }),
            experience: Some(Experience { items: vec![acme] }),
            education: Some(Education { items: vec![msc] }),
            skills: Some(Skills {
                categories: vec![
                    SkillCategory {
                        name: "Languages".into(),
                        group: SkillGroup::List {
                            items: vec![
                                SkillItem::Plain("R".into()),
                                SkillItem::Named { name: "Python".into() },
                            ],
                        },
                    },
                    SkillCategory {
                        name: "Tools".into(),
                        group: SkillGroup::Tags {
                            items: vec![
                                SkillItem::Plain("Git".into()),
                                SkillItem::Plain("Docker".into()),
                                SkillItem::Plain("dbt".into()),
                            ],
                        },
                    },
                    SkillCategory {
                        name: "Methods".into(),
                        group: SkillGroup::Proficiency {
                            items: vec![ProficiencyItem {
                                name: "Bayesian inference".into(),
                                level: 90,
                                label: "Expert".into(),
                            }],
                        },
                    },
                ],
            }),
            settings: None,
        }
    }

    pub fn state() -> AppState {
        AppState::with_today(today()).with_site(site())
    }
}
