use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::faq::FaqItem;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::section::Section;
use crate::{config, content, scroll};

#[function_component(About)]
fn about() -> Html {
    html! {
        <Section id="about" title="About the Competition">
            <p>
                {"The InvestWest Competition is a national investment challenge created by \
                  high school students from Westchester with the goal of promoting financial \
                  literacy and investment skills among students across the country. Hosted \
                  on the "}
                <em>{"How The Market Works (HTMW)"}</em>
                {" trading platform, the competition provides participants with a hands-on \
                  opportunity to learn about the stock market and practice real-world \
                  investing strategies in a risk-free environment."}
            </p>
            <p>
                {"By combining education with competition, InvestWest empowers students to \
                  build the financial knowledge and confidence they need for the future."}
            </p>
        </Section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <Section id="how" title="How It Works" alt={true}>
            <p>
                {"Each participant begins the competition with a virtual balance of "}
                <strong>{"$100,000"}</strong>
                {" in cash. Trading mirrors the real market and follows the New York Stock \
                  Exchange schedule: Monday through Friday, 9:30 AM – 4:00 PM EST. \
                  Participants can invest in publicly traded companies and experience market \
                  dynamics in real time — without financial risk."}
            </p>
            <div class="grid grid--2">
                <div class="card">
                    <h3 class="card__title">{"Key Constraints"}</h3>
                    <ul class="checklist">
                        <li>{"No stock purchases under $5"}</li>
                        <li>{"Maximum 25% of portfolio in any single stock"}</li>
                        <li>{"No options, commodities, or short selling"}</li>
                        <li>{"One account per student"}</li>
                    </ul>
                </div>
                <div class="card">
                    <h3 class="card__title">{"Why These Rules?"}</h3>
                    <p>
                        {"The rules emphasize diversification and discourage speculative \
                          behavior. They help students learn disciplined portfolio \
                          construction, risk management, and long-term thinking — skills that \
                          translate to responsible investing habits."}
                    </p>
                </div>
            </div>
        </Section>
    }
}

#[function_component(Prizes)]
fn prizes() -> Html {
    html! {
        <Section id="prizes" title="Prizes">
            <p>
                {"To recognize achievement, InvestWest offers a prize pool of "}
                <strong>{"$1,000"}</strong>
                {". Prizes are awarded to the top three competitors by final portfolio value."}
            </p>
            <div class="grid grid--3">
                { for content::PRIZES.iter().map(|prize| html! {
                    <div class="prize">
                        <div class="prize__icon" aria-hidden="true">{ prize.medal }</div>
                        <h3 class="prize__title">{ prize.place }</h3>
                        <p class="prize__amount">{ prize.amount }</p>
                    </div>
                }) }
            </div>
            <p class="muted">
                {"In the event of a tie, additional judging criteria may be used to determine placement."}
            </p>
        </Section>
    }
}

#[function_component(Rules)]
fn rules() -> Html {
    html! {
        <Section id="rules" title="Rules & Fair Play" alt={true}>
            <p>
                {"To ensure fairness and encourage smart investing, participants may not \
                  purchase stocks priced under $5 or allocate more than "}
                <strong>{"25%"}</strong>
                {" of their portfolio to a single stock. Trading follows the schedule of the \
                  New York Stock Exchange, with market hours from Monday to Friday, 9:30 AM \
                  to 4:00 PM EST. In addition, certain strategies such as trading options, \
                  commodities, and short selling are prohibited."}
            </p>
            <p>
                {"Students are limited to one account each. Any attempts to register multiple \
                  accounts will result in removal of all accounts. Please trade responsibly \
                  and respect the spirit of the competition."}
            </p>
        </Section>
    }
}

#[function_component(Eligibility)]
fn eligibility() -> Html {
    html! {
        <Section id="eligibility" title="Student Eligibility">
            <p>
                {"The InvestWest Competition is open to all "}
                <strong>{"high school students in the United States"}</strong>
                {". Whether you are new to investing or already exploring the stock market, \
                  you are welcome to participate and gain valuable real-world experience in a \
                  supportive and educational environment."}
            </p>
        </Section>
    }
}

#[function_component(Registration)]
fn registration() -> Html {
    let open_htmw = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::open_external(config::HTMW_REGISTER_URL);
    });
    let open_form = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::open_external(config::ENTRY_FORM_URL);
    });

    html! {
        <Section id="registration" title="Registration">
            <p>
                {"Step 1: Click the button below to join the HTMW competition. When prompted, \
                  enter the password "}
                <strong>{ config::REGISTRATION_PASSWORD }</strong>
                {"."}
            </p>
            <div class="cta">
                <button class="btn btn--primary btn--lg" onclick={open_htmw}>
                    {"Register on HTMW"}
                </button>
                <p class="muted">
                    {"If the link does not open, copy this URL into your browser: "}
                    <code>{ config::HTMW_REGISTER_URL }</code>
                </p>
                <img
                    class="registration__screenshot"
                    src="/screenshot.png"
                    loading="lazy"
                    alt="Screenshot of the HTMW registration page showing the manual sign-up steps"
                />
            </div>
            <p>
                {"Step 2: After registering on HTMW, fill out the Google Form below. You will \
                  need your HTMW username, school, grade, and email to complete it. This step \
                  is required to be officially entered."}
            </p>
            <div class="important">
                <button class="btn btn--primary" onclick={open_form}>
                    {"Fill Out Google Form"}
                </button>
            </div>
        </Section>
    }
}

#[function_component(Dates)]
fn dates() -> Html {
    html! {
        <Section id="dates" title="Important Dates" alt={true}>
            <ol class="timeline" aria-label="Key dates timeline">
                { for content::TIMELINE.iter().map(|entry| html! {
                    <li class="timeline__item">
                        <div class="timeline__dot" aria-hidden="true"></div>
                        <div class="timeline__content">
                            <div class="timeline__label">{ entry.label }</div>
                            <div class="timeline__date">{ entry.date }</div>
                        </div>
                    </li>
                }) }
            </ol>
            <p class="muted">
                {"Once entered, you’ll be added to the competition and can start managing \
                  your virtual portfolio on the start date: "}
                <strong>{"12/02/25"}</strong>
                {"."}
            </p>
        </Section>
    }
}

#[function_component(Faq)]
fn faq() -> Html {
    html! {
        <Section id="faq" title="Frequently Asked Questions">
            { for content::FAQ_ENTRIES.iter().map(|entry| html! {
                <FaqItem
                    question={entry.question}
                    answer={entry.answer}
                    default_open={entry.default_open}
                />
            }) }
        </Section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <Section id="contact" title="Contact Us" alt={true}>
            <p>{"Have questions about the competition? Reach out directly:"}</p>
            <div class="contact-grid">
                <div class="contact-card">
                    <strong>{"Phone:"}</strong>
                    <p>{ config::CONTACT_PHONE }</p>
                </div>
                <div class="contact-card">
                    <strong>{"Email:"}</strong>
                    <p>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                            { config::CONTACT_EMAIL }
                        </a>
                    </p>
                </div>
            </div>
        </Section>
    }
}

/// The whole page below the navbar: hero, the nine anchored sections, footer
/// and the floating back-to-top control.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page">
            <Hero />
            <main>
                <About />
                <HowItWorks />
                <Prizes />
                <Rules />
                <Eligibility />
                <Registration />
                <Dates />
                <Faq />
                <Contact />
            </main>
            <Footer />
            <BackToTop />

            <style>
                {r#"
                .container {
                    max-width: 1040px;
                    margin: 0 auto;
                    padding: 0 1.25rem;
                }

                .link {
                    color: #0a6cff;
                    text-decoration: none;
                    border-bottom: 1px solid rgba(10, 108, 255, 0.35);
                }

                .link:hover {
                    border-bottom-color: #0a6cff;
                }

                .btn {
                    appearance: none;
                    border: 1px solid #c8d2e0;
                    background: #ffffff;
                    color: #1c2430;
                    border-radius: 10px;
                    padding: 0.7rem 1.3rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.15s ease, box-shadow 0.15s ease;
                }

                .btn:hover {
                    transform: translateY(-1px);
                    box-shadow: 0 6px 18px rgba(16, 42, 84, 0.12);
                }

                .btn--primary {
                    background: #0a6cff;
                    border-color: #0a6cff;
                    color: #ffffff;
                }

                .btn--lg {
                    padding: 0.9rem 1.8rem;
                    font-size: 1.05rem;
                }

                .muted {
                    color: #64748b;
                    font-size: 0.95rem;
                }

                /* Hero */

                .hero {
                    position: relative;
                    padding: 10rem 0 7rem;
                    background: linear-gradient(160deg, #0b2447 0%, #19376d 55%, #576cbc 100%);
                    color: #ffffff;
                    overflow: hidden;
                }

                .hero__title {
                    font-size: 3rem;
                    margin: 0 0 1rem;
                    letter-spacing: -0.02em;
                }

                .hero__subtitle {
                    max-width: 680px;
                    font-size: 1.15rem;
                    color: #dbe4f3;
                    margin: 0 0 2rem;
                }

                .hero__subtitle .link {
                    color: #a5c8ff;
                    border-bottom-color: rgba(165, 200, 255, 0.5);
                }

                .hero__actions {
                    display: flex;
                    gap: 0.9rem;
                    flex-wrap: wrap;
                }

                .hero__wave {
                    position: absolute;
                    bottom: -1px;
                    left: 0;
                    width: 100%;
                    height: 56px;
                    background: #ffffff;
                    clip-path: ellipse(75% 100% at 50% 100%);
                }

                /* Sections */

                .section {
                    padding: 4.5rem 0;
                }

                .section--alt {
                    background: #f3f6fb;
                }

                .section__title {
                    font-size: 1.9rem;
                    margin: 0 0 1.4rem;
                    letter-spacing: -0.01em;
                }

                .section__content p {
                    max-width: 760px;
                }

                .grid {
                    display: grid;
                    gap: 1.25rem;
                    margin: 1.75rem 0;
                }

                .grid--2 {
                    grid-template-columns: repeat(2, 1fr);
                }

                .grid--3 {
                    grid-template-columns: repeat(3, 1fr);
                }

                .card {
                    background: #ffffff;
                    border: 1px solid #e3e9f2;
                    border-radius: 14px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 14px rgba(16, 42, 84, 0.05);
                }

                .card__title {
                    margin: 0 0 0.75rem;
                    font-size: 1.15rem;
                }

                .checklist {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .checklist li {
                    padding: 0.4rem 0 0.4rem 1.6rem;
                    position: relative;
                }

                .checklist li::before {
                    content: '✓';
                    position: absolute;
                    left: 0;
                    color: #0a9e5b;
                    font-weight: 700;
                }

                /* Prizes */

                .prize {
                    text-align: center;
                    background: #ffffff;
                    border: 1px solid #e3e9f2;
                    border-radius: 14px;
                    padding: 1.75rem 1.25rem;
                }

                .prize__icon {
                    font-size: 2.2rem;
                }

                .prize__title {
                    margin: 0.6rem 0 0.2rem;
                    font-size: 1.05rem;
                }

                .prize__amount {
                    margin: 0;
                    font-size: 1.6rem;
                    font-weight: 700;
                    color: #0a6cff;
                }

                /* Registration */

                .cta {
                    margin: 1.5rem 0 2.25rem;
                }

                .cta .muted {
                    margin-top: 0.8rem;
                }

                .cta code {
                    background: #eef2f8;
                    border-radius: 6px;
                    padding: 0.15rem 0.4rem;
                    font-size: 0.9rem;
                    word-break: break-all;
                }

                .registration__screenshot {
                    display: block;
                    max-width: 560px;
                    width: 100%;
                    margin-top: 1.25rem;
                    border: 1px solid #e3e9f2;
                    border-radius: 12px;
                    box-shadow: 0 6px 20px rgba(16, 42, 84, 0.1);
                }

                .important {
                    margin-top: 1rem;
                }

                /* Timeline */

                .timeline {
                    list-style: none;
                    margin: 1.5rem 0;
                    padding: 0 0 0 1.4rem;
                    border-left: 2px solid #c8d6ec;
                }

                .timeline__item {
                    position: relative;
                    padding: 0 0 1.4rem 1rem;
                }

                .timeline__item:last-child {
                    padding-bottom: 0;
                }

                .timeline__dot {
                    position: absolute;
                    left: -1.45rem;
                    top: 0.35rem;
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                    background: #0a6cff;
                    border: 2px solid #ffffff;
                    box-shadow: 0 0 0 2px #c8d6ec;
                }

                .timeline__label {
                    font-weight: 600;
                }

                .timeline__date {
                    color: #64748b;
                    font-size: 0.95rem;
                }

                /* FAQ */

                .faq {
                    background: #ffffff;
                    border: 1px solid #e3e9f2;
                    border-radius: 12px;
                    margin-bottom: 0.9rem;
                    overflow: hidden;
                }

                .faq__q {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.1rem 1.25rem;
                    background: none;
                    border: none;
                    text-align: left;
                    font-weight: 600;
                    cursor: pointer;
                }

                .faq__chev {
                    color: #0a6cff;
                }

                .faq__a {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                    padding: 0 1.25rem;
                    color: #475569;
                }

                .faq--open .faq__a {
                    max-height: 300px;
                    padding-bottom: 1.1rem;
                }

                /* Contact */

                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.25rem;
                    max-width: 620px;
                    margin-top: 1.25rem;
                }

                .contact-card {
                    background: #ffffff;
                    border: 1px solid #e3e9f2;
                    border-radius: 12px;
                    padding: 1.25rem;
                }

                .contact-card p {
                    margin: 0.4rem 0 0;
                }

                .contact-card a {
                    color: #0a6cff;
                    text-decoration: none;
                }

                /* Footer */

                .footer {
                    background: #0b2447;
                    color: #c9d6ea;
                    padding: 2rem 0;
                    margin-top: 2rem;
                }

                .footer__inner {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .footer__brand {
                    font-weight: 700;
                    color: #ffffff;
                }

                .footer__meta {
                    font-size: 0.9rem;
                }

                /* Back to top */

                .backtotop {
                    position: fixed;
                    right: 1.4rem;
                    bottom: 1.4rem;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: none;
                    background: #0a6cff;
                    color: #ffffff;
                    font-size: 1.3rem;
                    cursor: pointer;
                    box-shadow: 0 8px 22px rgba(10, 108, 255, 0.4);
                    z-index: 90;
                }

                @media (max-width: 820px) {
                    .hero__title {
                        font-size: 2.2rem;
                    }

                    .grid--2,
                    .grid--3,
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }

                    .section {
                        padding: 3rem 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}
