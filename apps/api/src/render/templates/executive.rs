//! Executive: bold header rule, company/period gutter, competencies grid.

use crate::models::ResumeDocument;
use crate::render::helpers::{
    contact_block, optional_section, paragraph, section, Chrome, ContactLayout, SectionKind,
};
use crate::render::style::AccentColor;
use crate::render::tree::Element;

pub fn render(doc: &ResumeDocument, accent: &AccentColor) -> Element {
    let p = &doc.personal;

    let header = Element::new("header")
        .class("flex justify-between items-center mb-6 pb-4 border-b-4")
        .style("border-color", accent.as_str())
        .child(
            Element::new("div")
                .child(
                    Element::new("h1")
                        .class("text-4xl font-extrabold tracking-tighter")
                        .text(&p.name),
                )
                .child(
                    Element::new("p")
                        .class("text-lg font-medium tracking-wide text-gray-600")
                        .text(&p.title),
                ),
        )
        .child(
            Element::new("div")
                .class("text-right")
                .child(contact_block(p, ContactLayout::Stacked)),
        );

    let experience = doc.experience.iter().map(|exp| {
        Element::new("div").class("mb-5").child(
            Element::new("div")
                .class("grid grid-cols-12 gap-4")
                .child(
                    Element::new("div")
                        .class("col-span-3")
                        .child(Element::new("p").class("font-bold").text(&exp.company))
                        .child(Element::new("p").class("text-xs text-gray-500").text(&exp.period)),
                )
                .child(
                    Element::new("div")
                        .class("col-span-9")
                        .child(Element::new("h3").class("font-bold text-base").text(&exp.role))
                        .child(paragraph(
                            "text-gray-700 text-xs leading-normal whitespace-pre-wrap",
                            &exp.description,
                        )),
                ),
        )
    });

    let education = doc.education.iter().map(|edu| {
        Element::new("div")
            .class("mb-1")
            .child(
                Element::new("h3")
                    .class("font-bold text-base inline")
                    .text(format!("{}, ", edu.degree)),
            )
            .child(
                Element::new("p")
                    .class("inline text-gray-700")
                    .text(format!("{} - {}", edu.institution, edu.period)),
            )
    });

    let certificates = optional_section(&doc.certificates, |certs| {
        section(
            SectionKind::Certificates,
            "Certificates & Training",
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

    // Languages sit inside the competencies block as their own list.
    let languages = optional_section(&doc.languages, |langs| {
        Element::new("ul")
            .class("list-disc list-inside space-y-1 mt-2")
            .attr("data-section", SectionKind::Languages.as_str())
            .child(
                Element::new("li")
                    .class("list-none font-semibold")
                    .style("color", accent.as_str())
                    .text("Languages"),
            )
            .children(
                langs
                    .iter()
                    .map(|l| Element::new("li").text(format!("{} ({})", l.language, l.proficiency))),
            )
    });

    let competencies = Element::new("div")
        .class("columns-3 gap-8 text-xs text-gray-700")
        .child(
            Element::new("ul")
                .class("list-disc list-inside space-y-1")
                .children(doc.skills.iter().map(|s| Element::new("li").text(&s.name))),
        )
        .maybe(languages);

    Element::new("div")
        .class("p-8 bg-white h-full text-sm text-gray-800")
        .child(header)
        .child(section(
            SectionKind::Summary,
            "Professional Profile",
            Chrome::Ruled,
            accent,
            [paragraph("text-gray-700 leading-relaxed whitespace-pre-wrap", &doc.summary)],
        ))
        .child(section(
            SectionKind::Experience,
            "Professional Experience",
            Chrome::Ruled,
            accent,
            experience,
        ))
        .child(section(SectionKind::Education, "Education", Chrome::Ruled, accent, education))
        .maybe(certificates)
        .child(section(
            SectionKind::Skills,
            "Core Competencies",
            Chrome::Ruled,
            accent,
            [competencies],
        ))
}
