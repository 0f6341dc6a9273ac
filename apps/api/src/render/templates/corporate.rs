//! Corporate: accent banner header over a 4/8 column grid.

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
        .class("p-8")
        .style("background-color", accent.as_str())
        .child(
            Element::new("h1")
                .class("text-4xl font-extrabold tracking-tight text-white")
                .text(&p.name),
        )
        .child(
            Element::new("p")
                .class("text-lg font-medium tracking-wide text-white/90")
                .text(&p.title),
        );

    let education = doc.education.iter().map(|edu| {
        Element::new("div")
            .class("mb-2 text-xs")
            .child(Element::new("h3").class("font-bold").text(&edu.institution))
            .child(Element::new("p").class("text-gray-600").text(&edu.degree))
            .child(Element::new("p").class("text-gray-500").text(&edu.period))
    });

    let languages = optional_section(&doc.languages, |langs| {
        section(
            SectionKind::Languages,
            "Languages",
            Chrome::Muted,
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
            Chrome::Muted,
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

    let side = Element::new("div").class("col-span-4").child(
        Element::new("div")
            .class("space-y-4")
            .child(section(
                SectionKind::Contact,
                "Contact",
                Chrome::Muted,
                accent,
                [contact_block(p, ContactLayout::Stacked)],
            ))
            .child(section(SectionKind::Education, "Education", Chrome::Muted, accent, education))
            .child(section(
                SectionKind::Skills,
                "Skills",
                Chrome::Muted,
                accent,
                [Element::new("p")
                    .class("text-xs text-gray-700 leading-relaxed")
                    .text(joined(doc.skills.iter().map(|s| s.name.as_str()), BULLET_SEPARATOR))],
            ))
            .maybe(languages)
            .maybe(certificates),
    );

    let experience = doc.experience.iter().map(|exp| {
        Element::new("div")
            .class("mb-4")
            .child(
                Element::new("div")
                    .class("flex justify-between items-baseline")
                    .child(Element::new("h3").class("font-bold text-base").text(&exp.role))
                    .child(Element::new("p").class("text-xs text-gray-500").text(&exp.period)),
            )
            .child(Element::new("p").class("italic text-gray-600 text-sm mb-1").text(&exp.company))
            .child(paragraph(
                "text-gray-700 text-xs leading-normal whitespace-pre-wrap",
                &exp.description,
            ))
    });

    let main = Element::new("div")
        .class("col-span-8")
        .child(section(
            SectionKind::Summary,
            "Summary",
            Chrome::Ruled,
            accent,
            [paragraph("text-gray-700 leading-relaxed whitespace-pre-wrap", &doc.summary)],
        ))
        .child(section(SectionKind::Experience, "Experience", Chrome::Ruled, accent, experience));

    Element::new("div")
        .class("h-full text-sm text-gray-800 bg-white")
        .child(header)
        .child(
            Element::new("div")
                .class("p-8")
                .child(Element::new("div").class("grid grid-cols-12 gap-8").child(side).child(main)),
        )
}
