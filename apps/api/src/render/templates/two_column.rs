//! Compact Two-Column: contact, education and skills in a grey sidebar.

use crate::models::ResumeDocument;
use crate::render::helpers::{
    contact_block, optional_section, paragraph, section, Chrome, ContactLayout, SectionKind,
};
use crate::render::style::AccentColor;
use crate::render::tree::Element;

pub fn render(doc: &ResumeDocument, accent: &AccentColor) -> Element {
    let p = &doc.personal;

    let identity = Element::new("div")
        .class("text-center mb-6")
        .child(
            Element::new("h1")
                .class("text-2xl font-bold")
                .style("color", accent.as_str())
                .text(&p.name),
        )
        .child(Element::new("p").class("text-sm font-medium text-gray-700").text(&p.title));

    let education = doc.education.iter().map(|edu| {
        Element::new("div")
            .class("mb-2")
            .child(Element::new("h3").class("font-bold text-xs").text(&edu.institution))
            .child(Element::new("p").class("text-xs text-gray-600").text(&edu.degree))
            .child(Element::new("p").class("text-xs text-gray-500").text(&edu.period))
    });

    let languages = optional_section(&doc.languages, |langs| {
        section(
            SectionKind::Languages,
            "Languages",
            Chrome::Column,
            accent,
            [Element::new("div").class("text-xs space-y-1").children(langs.iter().map(|l| {
                Element::new("p")
                    .child(Element::new("span").class("font-semibold").text(format!("{}:", l.language)))
                    .text(format!(" {}", l.proficiency))
            }))],
        )
    });

    let certificates = optional_section(&doc.certificates, |certs| {
        section(
            SectionKind::Certificates,
            "Certificates",
            Chrome::Column,
            accent,
            [Element::new("div").class("text-xs space-y-1").children(certs.iter().map(|c| {
                Element::new("div")
                    .class("mb-1")
                    .child(Element::new("p").class("font-semibold").text(&c.name))
                    .child(
                        Element::new("p")
                            .class("text-gray-600")
                            .text(format!("{} - {}", c.issuer, c.date)),
                    )
            }))],
        )
    });

    let sidebar = Element::new("aside")
        .class("w-1/3 bg-gray-100 p-6")
        .child(identity)
        .child(section(
            SectionKind::Contact,
            "Contact",
            Chrome::Column,
            accent,
            [contact_block(p, ContactLayout::Stacked)],
        ))
        .child(section(SectionKind::Education, "Education", Chrome::Column, accent, education))
        .child(section(
            SectionKind::Skills,
            "Skills",
            Chrome::Column,
            accent,
            [Element::new("ul")
                .class("text-xs space-y-1")
                .children(doc.skills.iter().map(|s| Element::new("li").text(&s.name)))],
        ))
        .maybe(languages)
        .maybe(certificates);

    let experience = doc.experience.iter().map(|exp| {
        Element::new("div")
            .class("mb-3")
            .child(
                Element::new("div")
                    .class("flex justify-between items-baseline")
                    .child(Element::new("h3").class("font-bold").text(&exp.role))
                    .child(Element::new("p").class("text-xs text-gray-500").text(&exp.period)),
            )
            .child(Element::new("p").class("italic text-gray-600 text-xs mb-1").text(&exp.company))
            .child(paragraph("text-xs text-gray-700 whitespace-pre-wrap", &exp.description))
    });

    let main = Element::new("main")
        .class("w-2/3 p-6 bg-white")
        .child(section(
            SectionKind::Summary,
            "Summary",
            Chrome::Column,
            accent,
            [paragraph("text-xs text-gray-700 text-justify whitespace-pre-wrap", &doc.summary)],
        ))
        .child(
            Element::new("div")
                .class("mt-4")
                .child(section(SectionKind::Experience, "Experience", Chrome::Column, accent, experience)),
        );

    Element::new("div")
        .class("flex h-full text-sm text-gray-800")
        .child(sidebar)
        .child(main)
}
