//! Classic: a timeless single-column layout.

use crate::models::ResumeDocument;
use crate::render::helpers::{
    contact_block, joined, optional_section, paragraph, section, Chrome, ContactLayout,
    SectionKind, BULLET_SEPARATOR,
};
use crate::render::style::AccentColor;
use crate::render::tree::Element;

pub fn render(doc: &ResumeDocument, accent: &AccentColor) -> Element {
    let p = &doc.personal;

    let header = Element::new("header")
        .class("text-center mb-6")
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

    let experience = doc.experience.iter().map(|exp| {
        Element::new("div")
            .child(
                Element::new("div")
                    .class("flex justify-between items-baseline")
                    .child(Element::new("h3").class("font-bold text-base").text(&exp.role))
                    .child(
                        Element::new("p")
                            .class("text-xs text-gray-600 font-medium")
                            .text(&exp.period),
                    ),
            )
            .child(
                Element::new("p")
                    .class("italic text-gray-700 text-sm mb-1")
                    .text(&exp.company),
            )
            .child(paragraph(
                "text-gray-700 text-xs leading-normal whitespace-pre-wrap",
                &exp.description,
            ))
    });

    let education = doc.education.iter().map(|edu| {
        Element::new("div")
            .class("flex justify-between items-baseline mb-1")
            .child(
                Element::new("div")
                    .child(Element::new("h3").class("font-bold text-base").text(&edu.institution))
                    .child(Element::new("p").class("italic text-gray-700 text-sm").text(&edu.degree)),
            )
            .child(
                Element::new("p")
                    .class("text-xs text-gray-600 font-medium")
                    .text(&edu.period),
            )
    });

    let languages = optional_section(&doc.languages, |langs| {
        section(
            SectionKind::Languages,
            "Languages",
            Chrome::Ruled,
            accent,
            [Element::new("div").class("flex flex-wrap").children(langs.iter().map(|l| {
                Element::new("div")
                    .class("mr-4 mb-1")
                    .child(Element::new("span").class("font-semibold").text(format!("{}: ", l.language)))
                    .child(Element::new("span").class("text-gray-600").text(&l.proficiency))
            }))],
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
            "Summary",
            Chrome::Ruled,
            accent,
            [paragraph("text-gray-700 text-justify leading-relaxed whitespace-pre-wrap", &doc.summary)],
        ))
        .child(section(
            SectionKind::Experience,
            "Experience",
            Chrome::Ruled,
            accent,
            [Element::new("div").class("space-y-4").children(experience)],
        ))
        .child(section(SectionKind::Education, "Education", Chrome::Ruled, accent, education))
        .child(section(
            SectionKind::Skills,
            "Skills",
            Chrome::Ruled,
            accent,
            [Element::new("p")
                .class("text-gray-700 leading-relaxed text-sm")
                .text(joined(doc.skills.iter().map(|s| s.name.as_str()), BULLET_SEPARATOR))],
        ))
        .maybe(languages)
        .maybe(certificates)
}
