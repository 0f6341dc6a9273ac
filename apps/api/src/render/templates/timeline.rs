//! Timeline Accent: experience and education hang off an accent-dotted timeline.

use crate::models::ResumeDocument;
use crate::render::helpers::{
    contact_block, joined, optional_section, paragraph, section, Chrome, ContactLayout,
    SectionKind, BULLET_SEPARATOR,
};
use crate::render::style::AccentColor;
use crate::render::tree::Element;

struct TimelineEntry<'a> {
    period: &'a str,
    title: &'a str,
    subtitle: &'a str,
    description: Option<&'a str>,
}

fn timeline_item(entry: TimelineEntry<'_>, accent: &AccentColor, is_last: bool) -> Element {
    let rail = (!is_last).then(|| {
        Element::new("div").class("absolute left-[5px] top-5 h-full w-px bg-gray-200")
    });

    let body = Element::new("div")
        .class("pb-6")
        .child(Element::new("h3").class("font-bold text-base").text(entry.title))
        .child(Element::new("p").class("italic text-gray-700 text-sm mb-1").text(entry.subtitle))
        .maybe(entry.description.map(|d| {
            paragraph("text-gray-700 text-xs leading-normal whitespace-pre-wrap", d)
        }));

    Element::new("div")
        .class("relative pl-8")
        .maybe(rail)
        .child(
            Element::new("div")
                .class("absolute left-0 top-1.5 h-3 w-3 rounded-full border-2 border-white ring-2 ring-gray-200")
                .style("background-color", accent.as_str()),
        )
        .child(
            Element::new("p")
                .class("absolute left-[-80px] top-1 text-xs font-semibold text-gray-500 w-[70px] text-right")
                .text(entry.period),
        )
        .child(body)
}

pub fn render(doc: &ResumeDocument, accent: &AccentColor) -> Element {
    let p = &doc.personal;

    let header = Element::new("header")
        .class("text-center mb-8")
        .child(Element::new("h1").class("text-4xl font-bold tracking-tight").text(&p.name))
        .child(
            Element::new("p")
                .class("text-lg font-medium")
                .style("color", accent.as_str())
                .text(&p.title),
        )
        .child(
            Element::new("div")
                .class("mt-3")
                .child(contact_block(p, ContactLayout::Inline { email_accent: None })),
        );

    let exp_count = doc.experience.len();
    let experience = doc.experience.iter().enumerate().map(|(i, exp)| {
        timeline_item(
            TimelineEntry {
                period: &exp.period,
                title: &exp.role,
                subtitle: &exp.company,
                description: Some(&exp.description),
            },
            accent,
            i + 1 == exp_count,
        )
    });

    let edu_count = doc.education.len();
    let education = doc.education.iter().enumerate().map(|(i, edu)| {
        timeline_item(
            TimelineEntry {
                period: &edu.period,
                title: &edu.institution,
                subtitle: &edu.degree,
                description: None,
            },
            accent,
            i + 1 == edu_count,
        )
    });

    let languages = optional_section(&doc.languages, |langs| {
        section(
            SectionKind::Languages,
            "Languages",
            Chrome::Hairline,
            accent,
            [Element::new("div").class("flex flex-col space-y-1").children(langs.iter().map(|l| {
                Element::new("div")
                    .class("text-xs flex justify-between")
                    .child(Element::new("span").class("font-semibold").text(&l.language))
                    .child(Element::new("span").class("text-gray-600").text(&l.proficiency))
            }))],
        )
    });

    let certificates = optional_section(&doc.certificates, |certs| {
        section(
            SectionKind::Certificates,
            "Certificates",
            Chrome::Hairline,
            accent,
            [Element::new("div").class("flex flex-col space-y-2").children(certs.iter().map(|c| {
                Element::new("div")
                    .class("text-xs")
                    .child(Element::new("h3").class("font-bold").text(&c.name))
                    .child(
                        Element::new("p")
                            .class("text-gray-600")
                            .text(format!("{}, {}", c.issuer, c.date)),
                    )
            }))],
        )
    });

    // Languages and certificates share a two-column row when either exists.
    let extras = (languages.is_some() || certificates.is_some()).then(|| {
        Element::new("div")
            .class("grid grid-cols-1 md:grid-cols-2 gap-x-8")
            .maybe(languages)
            .maybe(certificates)
    });

    Element::new("div")
        .class("p-10 bg-white h-full text-sm text-gray-800")
        .child(header)
        .child(section(
            SectionKind::Summary,
            "Summary",
            Chrome::Hairline,
            accent,
            [paragraph("text-gray-700 text-justify leading-relaxed whitespace-pre-wrap", &doc.summary)],
        ))
        .child(
            section(
                SectionKind::Experience,
                "Experience",
                Chrome::Hairline,
                accent,
                [Element::new("div").class("relative").children(experience)],
            )
            .class("ml-20"),
        )
        .child(
            section(
                SectionKind::Education,
                "Education",
                Chrome::Hairline,
                accent,
                [Element::new("div").class("relative").children(education)],
            )
            .class("ml-20"),
        )
        .child(section(
            SectionKind::Skills,
            "Skills",
            Chrome::Hairline,
            accent,
            [Element::new("p")
                .class("text-gray-700 leading-relaxed text-sm")
                .text(joined(doc.skills.iter().map(|s| s.name.as_str()), BULLET_SEPARATOR))],
        ))
        .maybe(extras)
}
