//! Minimalist: light, centred and text-focused.

use crate::models::ResumeDocument;
use crate::render::helpers::{
    contact_block, optional_section, paragraph, section, Chrome, ContactLayout, SectionKind,
    BULLET_SEPARATOR,
};
use crate::render::style::AccentColor;
use crate::render::tree::{Element, Node};

/// Inline run of items separated by bullets, trailing separator omitted.
fn bullet_run<I>(items: I) -> Vec<Node>
where
    I: ExactSizeIterator<Item = Element>,
{
    let last = items.len().saturating_sub(1);
    items
        .enumerate()
        .map(|(i, item)| {
            let item = if i < last { item.text(BULLET_SEPARATOR) } else { item };
            Node::from(item)
        })
        .collect()
}

pub fn render(doc: &ResumeDocument, accent: &AccentColor) -> Element {
    let p = &doc.personal;

    let header = Element::new("header")
        .class("mb-8")
        .child(
            Element::new("h1")
                .class("text-3xl font-light tracking-widest uppercase")
                .text(&p.name),
        )
        .child(
            Element::new("p")
                .class("text-sm tracking-widest")
                .style("color", accent.as_str())
                .text(&p.title),
        )
        .child(Element::new("div").class("mt-4 border-y py-2").child(contact_block(
            p,
            ContactLayout::Inline {
                email_accent: Some(accent),
            },
        )));

    // The summary has no heading in this layout but is still a section.
    let summary = Element::new("section")
        .class("mb-6")
        .attr("data-section", SectionKind::Summary.as_str())
        .child(paragraph("text-gray-700 text-center italic whitespace-pre-wrap", &doc.summary));

    let experience = doc.experience.iter().map(|exp| {
        Element::new("div")
            .class("mb-4")
            .child(
                Element::new("div")
                    .class("flex justify-between")
                    .child(
                        Element::new("h3")
                            .class("font-bold")
                            .text(&exp.role)
                            .child(
                                Element::new("span")
                                    .class("font-normal text-gray-600")
                                    .text(format!(" at {}", exp.company)),
                            ),
                    )
                    .child(Element::new("p").class("text-xs text-gray-500").text(&exp.period)),
            )
            .child(paragraph("text-gray-700 text-xs pl-4 whitespace-pre-wrap", &exp.description))
    });

    let education = doc.education.iter().map(|edu| {
        Element::new("div")
            .class("flex justify-between mb-1")
            .child(
                Element::new("h3")
                    .class("font-bold")
                    .text(&edu.institution)
                    .child(
                        Element::new("span")
                            .class("font-normal text-gray-600")
                            .text(format!(" - {}", edu.degree)),
                    ),
            )
            .child(Element::new("p").class("text-xs text-gray-500").text(&edu.period))
    });

    let skills = bullet_run(
        doc.skills
            .iter()
            .map(|s| Element::new("span").class("inline-block mr-2").text(&s.name)),
    );

    let languages = optional_section(&doc.languages, |langs| {
        let run = bullet_run(langs.iter().map(|l| {
            Element::new("span")
                .class("inline-block mr-3")
                .child(Element::new("span").class("font-semibold").text(format!("{}:", l.language)))
                .text(format!(" {}", l.proficiency))
        }));
        section(
            SectionKind::Languages,
            "Languages",
            Chrome::Ruled,
            accent,
            [Element::new("div").class("text-gray-700 leading-relaxed text-center").children(run)],
        )
    });

    let certificates = optional_section(&doc.certificates, |certs| {
        let run = bullet_run(certs.iter().map(|c| {
            Element::new("span")
                .class("inline-block mr-3")
                .child(Element::new("span").class("font-semibold").text(&c.name))
                .text(format!(" ({}, {})", c.issuer, c.date))
        }));
        section(
            SectionKind::Certificates,
            "Certificates",
            Chrome::Ruled,
            accent,
            [Element::new("div").class("text-gray-700 leading-relaxed text-center").children(run)],
        )
    });

    Element::new("div")
        .class("p-10 bg-white h-full text-sm text-gray-800")
        .child(header)
        .child(summary)
        .child(section(SectionKind::Experience, "Experience", Chrome::Ruled, accent, experience))
        .child(section(SectionKind::Education, "Education", Chrome::Ruled, accent, education))
        .child(section(
            SectionKind::Skills,
            "Skills",
            Chrome::Ruled,
            accent,
            [Element::new("div").class("text-gray-700 leading-relaxed text-center").children(skills)],
        ))
        .maybe(languages)
        .maybe(certificates)
}
