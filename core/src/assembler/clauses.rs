//! Fixed contract wording, grouped per section.
//!
//! Constants hold clauses with nothing to substitute; functions interpolate
//! the contract parameters.

use contractr_common::contract::ContractConfig;

pub(super) const INTRODUCTION: &str = "I will always do my best to fulfil your needs and meet your goals, \
but sometimes it is best to have a few simple things written down so that we both know what is what, \
who should do what and what happens if things go wrong. In this contract you won't find complicated \
legal terms or large passages of unreadable text. I have no desire to trick you into signing something \
that you might later regret. I want what's best for the safety of both parties, now and in the future.";

pub(super) const CLIENT_AGREES: &str = "As my client, you agree:";

pub(super) const CLIENT_AGREEMENTS: [&str; 5] = [
    "That you have the power to enter into this contract on behalf of yourself, your company, or your organization.",
    "To provide me with everything that I need to complete the project including (but not limited to) text, copy, \
account credentials, images, and other information as and when I need it, in the format that I ask for.",
    "To review my work, provide feedback, and sign-off within agreed upon timescales.",
    "To be bound by any dates that we set together for deadlines.",
    "To stick to the payment schedule described at the end of this contract.",
];

pub(super) const DEVELOPER_AGREES: &str = "As the developer, I agree:";

pub(super) const DEVELOPER_AGREEMENTS: [&str; 4] = [
    "That I have the experience and ability to perform the services that we have agreed upon.",
    "To carry out this service in a professional and timely manner.",
    "To respect the confidentiality of any information that you give me.",
    "To endeavor to meet all of the deadlines set, but I can't be held responsible for a missed launch date or \
deadline if you have been late in supplying materials or have not approved or signed off on my work on time at \
any stage.",
];

pub(super) const CLIENT_CANCELS: &str = "If you wish to cancel this Agreement:";

pub(super) const CLIENT_CANCELLATION: [&str; 4] = [
    "I will retain your down payment.",
    "I will retain the payments for each of the completed phases.",
    "If I am working on a phase that has not yet been completed, that phase will be considered completed and as \
such I will receive full payment for it as a \"kill fee\".",
    "The \"kill fee\" will be considered the final payment for the project.",
];

pub(super) const DEVELOPER_CANCELS: &str = "If I wish to cancel this Agreement:";

pub(super) const DEVELOPER_CANCELLATION: [&str; 4] = [
    "I will retain your down payment.",
    "I will retain the payments for each of the completed phases.",
    "If I am working on a phase that has not yet been completed, that phase will be disregarded, and as such you \
will not be required to pay for any work done on that phase.",
    "The payment for the last completed phase will be considered the final payment for the project.",
];

pub(super) const COPYRIGHT_ASSIGNMENTS_LEAD: &str =
    "When I receive the final payment, all copyright and intellectual property is automatically assigned as follows:";

pub(super) const PHASE_CHECKLIST: [&str; 4] = [
    "Feedback on phase.",
    "Testing of phase and integration with previous phases.",
    "Amendments.",
    "Testing of amendments.",
];

pub(super) const FINAL_REVIEW_TITLE: &str = "Final Review & Amendments";
pub(super) const FINAL_REVIEW_COST: &str = "Cost: Subject to change based on changes & amendments.";
pub(super) const FINAL_REVIEW_CHECKLIST: [&str; 5] = [
    "Feedback on entire project.",
    "Testing of entire project.",
    "Amendments.",
    "Final review and feedback.",
    "Sign-off.",
];

pub(super) const SIGNATURES_CLOSING: &str = "Everyone should sign above and keep a copy for their own records.";

pub(super) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(super) fn title(config: &ContractConfig) -> String {
    format!("{} Development Contract.", capitalize(&config.project_type))
}

pub(super) fn subtitle(config: &ContractConfig) -> String {
    let me = &config.developer.party;
    let client = &config.client;
    format!(
        "A contract between me: {} (\"I\", \"me\", \"developer\", \"{}\", or \"{}\" in this document) \
and you: {} (\"you\", \"client\", \"{}\", \"{}\", or \"{}\" in this document).",
        me.name, me.nickname, me.company, client.name, client.nickname, client.company, client.contact
    )
}

pub(super) fn project_summary(config: &ContractConfig) -> String {
    format!(
        "You, the client ({}), are hiring me, {}, to develop a {} application for the estimated total price \
outlined in our previous correspondence. The agreed payment plan is at the end of the document.",
        config.client.name, config.developer.party.name, config.project_type
    )
}

pub(super) fn details(config: &ContractConfig) -> Vec<String> {
    let developer = &config.developer;
    vec![
        format!(
            "I can and will provide suggestions for designs, templates, look and feel, layout, and functionality \
of the {} application. I will provide some design support as necessary to complete the design of the app, \
fully develop the application, and implement a custom backend as needed, and potentially extend the backend to \
allow for future maintenance of the site on your own.",
            config.project_type
        ),
        String::from("*Testing and Cross-Browser Compatibility*"),
        String::from(
            "I will not be testing the application in old or abandoned environments, including but not limited \
to some examples such as Microsoft Internet Explorer, previous versions of browsers such as Apple's Safari, \
Mozilla's Firefox, Google's Chrome (or Chromium), or Opera unless otherwise specified. If you need to show the \
same or similar visual design to users using these older browsers, we will have to re-negotiate an increased \
rate, as developing for these older browsers is costly and time-consuming.",
        ),
        String::from("*Content Input*"),
        String::from(
            "I am not responsible for writing or inputting any content. That includes but is not limited to: \
products, page content, categories, attributes, and product tags. I'll be happy to help, though, and in \
addition to the initial estimate I will charge you at an hourly rate for this content input. Even so, I expect \
most of the copy to be provided by you, as you know the nature of your business and message better than I do.",
        ),
        String::from("*Workflow and Design*"),
        String::from(
            "If you have already engaged the services of a graphic designer who has produced mockups of the \
design of your website, I will work from these and endeavor to produce a website resembling them as closely as \
possible. Note that it might not be possible to produce pixel-perfect interpretations of them across all \
browsers and under all circumstances due to technical limitations beyond my control. I will need your mockups \
in both PSD and PNG, and whichever other source files you were provided with, with all of the original layers \
intact so I can access the required assets from them directly.",
        ),
        String::from("*Changes and Revisions*"),
        format!(
            "Changes and revisions can be submitted by the client upon review of each milestone or phase \
(referred to solely as \"phase\"), and finally upon review of the last phase which will include a project-wide \
review. If further work is needed after the completion of the final phase, work can be acquired at an \
additional cost of {}/hour, subject to change based upon availability.",
            developer.money(developer.hourly_rate)
        ),
        format!(
            "As each phase is being worked on, changes and revisions should be communicated quickly and directly \
so that fixes happen on an ongoing basis. When development has been completed for a phase, feedback from the \
client cannot take more than {} business days or the phase is considered to be satisfactorily complete.",
            developer.feedback_days
        ),
    ]
}

pub(super) fn legal(config: &ContractConfig) -> Vec<String> {
    let me = &config.developer.party.name;
    let client = &config.client.name;
    let project = &config.project_type;
    vec![
        format!(
            "I will take the utmost care and attention to ensure that my provided product is error-free and \
adequately future-proofed, but due to the rapidly-evolving nature of the {project} ecosystem and standards it is \
not possible to guarantee that the code will function as intended indefinitely and as such I can't be liable to \
you or any third party for damages, including but not limited to lost profits, lost savings or any other \
incidental, consequential, or special damages arising out of the operation of, inability to operate, or loss \
of function of this {project} application and any other {project} application, even if I have been made aware \
of the possibilities of such damages."
        ),
        String::from(
            "*Severability.* Whenever possible, each provision of this Agreement shall be interpreted in such \
manner as to be effective and valid under applicable law, but if any provision of this Agreement is held \
invalid or unenforceable, the remainder of this Agreement shall nevertheless remain in full force and effect \
and the invalid or unenforceable provision shall be replaced by a valid or enforceable provision.",
        ),
        String::from(
            "*Third Party Materials.* All third party materials are the exclusive property of their respective \
owners. I shall inform you of all third party materials that may be/are required to perform the services or \
otherwise integrated into the final project. Under such circumstances, I shall inform you of any need to \
license.",
        ),
        format!(
            "*Exclusivity.* {client} expressly acknowledge that although they are free to engage others to \
perform services of the same or similar nature to those provided by {me}, I must be notified of such \
engagements, and in the occurrence of an engagement of this nature I retain the right to terminate my \
involvement in the project and consider it equivalent to - under the terms of this contract - you cancelling \
the agreement, and as such I will retain the right to receive the same \"kill fee\" referred to in the previous \
cancellation section. Additionally, {me} shall be entitled to offer and provide my services to others, solicit \
other clients, and otherwise advertise the services offered by {me}."
        ),
        format!(
            "*Governing Law.* The formation, construction, performance and enforcement of this Agreement shall \
be in accordance with the laws of {} without regard to its conflict of law provisions or the conflict of law \
provisions of any other jurisdiction.",
            config.jurisdiction
        ),
        String::from(
            "Just like a parking ticket, you cannot transfer this contract to anyone else without my \
permission. This contract stays in place and need not be renewed.",
        ),
    ]
}

pub(super) fn copyright(config: &ContractConfig) -> Vec<String> {
    let me = &config.developer.party.name;
    let client = &config.client.name;
    vec![
        format!(
            "You guarantee to me that any elements of text, graphics, photos, designs, trademarks, or other \
artwork that you provide me for inclusion in the {} application are either owned by your good self, or that \
you have permission to use them.",
            config.project_type
        ),
        format!(
            "By default, all copyrights and intellectual properties are solely owned by {me}, and will only be \
transferred to {client} upon the final payment for the project."
        ),
        format!(
            "In the event of the cancellation of this Agreement, the payment for the last complete phase will be \
considered the final payment, and {client} will receive the copyrights and intellectual property for all of \
the completed phases."
        ),
        String::from(COPYRIGHT_ASSIGNMENTS_LEAD),
    ]
}

pub(super) fn copyright_assignments(config: &ContractConfig) -> Vec<String> {
    vec![
        String::from(
            "You own the graphics and other visual elements that I create for you for this project. I will give \
you a copy of all related files and you should store them carefully as I will not be required to keep them \
nor provide any native source files that I used in making them. If I decide to provide any of these native \
source files, I will be under no future requirement to provide or replace these files at any time.",
        ),
        String::from(
            "You also own all text content, photographs, and other data that you provided, unless they are \
owned by someone else.",
        ),
        String::from(
            "I reserve the right to retain a copy of all files used in or relating to the creation of the \
project. This does not mean that I own the copyright to them.",
        ),
        format!(
            "I reserve the right to display and link to your completed project as part of my portfolio and \
write about the project on websites, in magazine articles, in books, or any other platform, unless otherwise \
agreed upon. In the case of this happening, I will notify you, and any additional publicity or traffic that \
your {} application gains is of course free of charge.",
            config.project_type
        ),
    ]
}

pub(super) const PAYMENTS_PREAMBLE: &str = "I am sure you understand how important it is for a small business \
such as myself that you pay the invoices that I send you promptly. As I'm also sure you want to remain on good \
terms, you agree to stick tight to the following payment schedule, which will be as follows, but may be revised \
based on further conversations between us.";

pub(super) fn signatures(config: &ContractConfig) -> [String; 3] {
    let me = &config.developer.party;
    let client = &config.client;
    [
        format!(
            "Client ({} for {}): \t\t_____________________",
            client.contact, client.name
        ),
        format!(
            "Developer ({} for {}): \t_____________________",
            me.name, me.company
        ),
        String::from("Witness (_____________________): \t\t\t_____________________"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("web"), "Web");
        assert_eq!(capitalize("iOS app"), "IOS app");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn title_uses_project_type() {
        let config = ContractConfig::sample();
        assert_eq!(title(&config), "Web Development Contract.");
    }

    #[test]
    fn details_quote_hourly_rate_and_feedback_window() {
        let config = ContractConfig::sample();
        let details = details(&config).join("\n");
        assert!(details.contains("$60 CAD/hour"));
        assert!(details.contains("more than 5 business days"));
    }
}
