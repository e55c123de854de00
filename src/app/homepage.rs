use leptos::prelude::*;

use crate::util::Section;

use super::{
    about::AboutSection,
    certifications::CertificationsSection,
    contact::ContactSection,
    experience::ExperienceSection,
    hero::HeroSection,
    projects::ProjectsSection,
    skills::SkillsSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="scroll-mt-16">
            <HeroSection />
        </section>
        <section id=Section::About.id() class="scroll-mt-16 py-20">
            <AboutSection />
        </section>
        <section id=Section::Experience.id() class="scroll-mt-16 py-20 bg-gray-50 dark:bg-gray-900/40">
            <ExperienceSection />
        </section>
        <section id=Section::Skills.id() class="scroll-mt-16 py-20">
            <SkillsSection />
        </section>
        <section id=Section::Projects.id() class="scroll-mt-16 py-20 bg-gray-50 dark:bg-gray-900/40">
            <ProjectsSection />
        </section>
        <section id=Section::Certifications.id() class="scroll-mt-16 py-20">
            <CertificationsSection />
        </section>
        <section id=Section::Contact.id() class="scroll-mt-16 py-20 bg-gray-50 dark:bg-gray-900/40">
            <ContactSection />
        </section>
    }
}
