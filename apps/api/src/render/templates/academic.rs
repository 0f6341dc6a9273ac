//! Academic: research statement first, publications-style entries.

use crate::models::ResumeDocument;
use crate::render::helpers::{
    contact_block, optional_section, paragraph, section, Chrome, ContactLayout, SectionKind,
    BULLET_SEPARATOR,
};
use crate::render::style::AccentColor;
use crate::render::tree::{Element, Node};

pub fn render(doc: &ResumeDocument, accent: &AccentColor) -> Element {
    let p = &doc.personal;

    let header = Element::new("header")
        .class("text-center mb-6 pb-4 border-b")
        .child(Element::new("h1").class("text-3xl font-bold tracking-tight").text(&p.name))
        .child(Element::new("p").class("text-md font-medium text-gray-600").text(&p.title))
        .child(
            Element::new("div")
                .class("mt-3")
                .child(contact_block(p, ContactLayout::Inline { email_accent: None })),
        );

    let education = doc.education.iter().map(|edu| {
        Element::new("div")
            .class("flex justify-between items-start mb-2")
            .child(
                Element::new("div")
                    .child(Element::new("h3").class("font-bold text-base").text(&edu.institution))
                    .child(Element::new("p").class("italic text-gray-700 text-sm").text(&edu.degree)),
            )
            .child(
                Element::new("p")
                    .class("text-xs text-gray-600 font-medium text-right")
                    .text(&edu.period),
            )
    });

    let experience = doc.experience.iter().map(|exp| {
        Element::new("div")
            .child(
                Element::new("div")
                    .class("flex justify-between items-baseline")
                    .child(Element::new("h3").class("font-bold text-base").text(&exp.role))
                    .child(Element::new("p").class("text-xs text-gray-600 font-medium").text(&exp.period)),
            )
            .child(Element::new("p").class("italic text-gray-700 text-sm mb-1").text(&exp.company))
            .child(paragraph(
                "text-gray-700 text-xs leading-normal whitespace-pre-wrap",
                &exp.description,
            ))
    });

    // One span per entry; the separator is its own text node so entries stay addressable.
    let skills = doc.skills.iter().enumerate().flat_map(|(i, s)| {
        let separator = (i > 0).then(|| Node::from(BULLET_SEPARATOR));
        separator
            .into_iter()
            .chain([Node::from(Element::new("span").class("inline-block").text(&s.name))])
    });

    let languages = optional_section(&doc.languages, |langs| {
        let entries = langs.iter().enumerate().flat_map(|(i, l)| {
            let separator = (i > 0).then(|| Node::from(BULLET_SEPARATOR));
            let entry = Element::new("span")
                .class("inline-block")
                .child(Element::new("span").class("font-semibold").text(format!("{}:", l.language)))
                .text(format!(" {}", l.proficiency));
            separator.into_iter().chain([Node::from(entry)])
        });
        section(
            SectionKind::Languages,
            "Languages",
            Chrome::Ruled,
            accent,
            [Element::new("div").class("text-gray-700 leading-relaxed").children(entries)],
        )
    });

    let certificates = optional_section(&doc.certificates, |certs| {
        section(
            SectionKind::Certificates,
            "Certificates",
            Chrome::Ruled,
            accent,
            certs.iter().map(|c| {
                Element::new("div")
                    .class("mb-1")
                    .child(Element::new("h3").class("font-bold text-base inline").text(format!("{} ", c.name)))
                    .child(
                        Element::new("p")
                            .class("inline text-gray-700")
                            .text(format!("- {}, {}", c.issuer, c.date)),
                    )
            }),
        )
    });

    Element::new("div")
        .class("p-8 bg-white h-full text-sm text-gray-800")
        .child(header)
        .child(section(
            SectionKind::Summary,
            "Research Statement",
            Chrome::Ruled,
            accent,
            [paragraph("text-gray-700 text-justify leading-relaxed whitespace-pre-wrap", &doc.summary)],
        ))
        .child(section(SectionKind::Education, "Education", Chrome::Ruled, accent, education))
        .child(section(
            SectionKind::Experience,
            "Research Experience",
            Chrome::Ruled,
            accent,
            [Element::new("div").class("space-y-4").children(experience)],
        ))
        .child(section(
            SectionKind::Skills,
            "Skills & Methods",
            Chrome::Ruled,
            accent,
            [Element::new("div").class("text-gray-700 leading-relaxed").children(skills)],
        ))
        .maybe(languages)
        .maybe(certificates)
}
