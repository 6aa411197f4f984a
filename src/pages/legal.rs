use yew::prelude::*;

use crate::behavior::modal::ModalKind;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub kind: ModalKind,
    pub title: AttrValue,
    pub children: Children,
}

// Backdrop and close button both carry `data-close-modal`.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    html! {
        <div class="modal" id={props.kind.element_id()} role="dialog" aria-modal="true">
            <div class="modal__backdrop" data-close-modal="true"></div>
            <div class="modal__content">
                <button class="modal__close" type="button" aria-label="Close" data-close-modal="true">
                    {"×"}
                </button>
                <h2>{ props.title.clone() }</h2>
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[function_component(PrivacyModal)]
pub fn privacy_modal() -> Html {
    html! {
        <Modal kind={ModalKind::Privacy} title="Privacy Policy">
            <section>
                <h3>{"1. What We Collect"}</h3>
                <p>{"When you use the contact form we receive:"}</p>
                <ul>
                    <li>{"Your name and email address (so we can reply)"}</li>
                    <li>{"The message you write to us"}</li>
                </ul>
            </section>

            <section>
                <h3>{"2. How It Is Processed"}</h3>
                <p>{"Form submissions are delivered to us by Formspree. This site itself sets no cookies and runs no analytics."}</p>
            </section>

            <section>
                <h3>{"3. Retention"}</h3>
                <p>{"We keep your message only as long as needed to answer it, and delete it on request."}</p>
            </section>

            <section>
                <h3>{"4. Your Rights"}</h3>
                <p>{"You have the right to:"}</p>
                <ul>
                    <li>{"Access the personal data we hold about you"}</li>
                    <li>{"Ask us to correct or delete it"}</li>
                </ul>
            </section>

            <section>
                <h3>{"5. Contact"}</h3>
                <p>{"For privacy-related inquiries, write to hello@thrivein.example."}</p>
            </section>
        </Modal>
    }
}

#[function_component(TermsModal)]
pub fn terms_modal() -> Html {
    html! {
        <Modal kind={ModalKind::Terms} title="Terms of Service">
            <section>
                <h3>{"1. Introduction"}</h3>
                <p>{"These Terms govern your use of the ThriveIn website. By using the site you agree to them."}</p>
            </section>

            <section>
                <h3>{"2. Services"}</h3>
                <p>{"Descriptions of coaching programs on this site are informational. Engagements are governed by a separate written agreement."}</p>
            </section>

            <section>
                <h3>{"3. Intellectual Property"}</h3>
                <p>{"All content on the site, including text, graphics and logos, belongs to ThriveIn unless stated otherwise."}</p>
            </section>

            <section>
                <h3>{"4. Limitation of Liability"}</h3>
                <p>{"The site is provided \"as is\" without warranties of any kind."}</p>
            </section>

            <section>
                <h3>{"5. Changes to Terms"}</h3>
                <p>{"We may update these Terms from time to time. Continued use of the site after a change constitutes acceptance of the new Terms."}</p>
            </section>
        </Modal>
    }
}
