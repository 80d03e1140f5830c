use leptos::*;
use leptos_router::A;

use crate::components::Footer;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="container home-page">
            <section class="hero">
                <h1>
                    "Know your home's "
                    <span class="accent">"climate risks"</span>
                    " before you buy"
                </h1>
                <p class="tagline">
                    "Get comprehensive climate risk assessments powered by AI. Make informed "
                    "property decisions with detailed reports on flood, fire, heat, and air "
                    "quality risks."
                </p>
                <div class="hero-actions">
                    <A href="/report" class="btn primary">"Get Started"</A>
                    <A href="/about" class="btn secondary">"Learn More"</A>
                </div>
            </section>

            <section class="features">
                <h2>"Why Choose ClimateLens?"</h2>
                <p class="section-lead">
                    "Advanced AI analysis meets comprehensive climate data to give you the complete picture"
                </p>
                <div class="feature-cards">
                    <div class="card">
                        <h3>"Risk Assessment"</h3>
                        <p>
                            "Comprehensive analysis of flood, fire, heat, and air quality risks "
                            "for any location"
                        </p>
                    </div>
                    <div class="card">
                        <h3>"Data Visualization"</h3>
                        <p>
                            "Clear charts and graphs that make complex climate data easy to understand"
                        </p>
                    </div>
                    <div class="card">
                        <h3>"Detailed Reports"</h3>
                        <p>
                            "Professional PDF reports you can share with agents, lenders, and insurers"
                        </p>
                    </div>
                    <div class="card">
                        <h3>"AI-Powered"</h3>
                        <p>
                            "Advanced AI summarizes complex environmental data into actionable insights"
                        </p>
                    </div>
                </div>
            </section>

            <section class="how-it-works">
                <h2>"How It Works"</h2>
                <p class="section-lead">"Get your climate risk report in three simple steps"</p>
                <div class="steps">
                    <div class="step">
                        <span class="step-number">"1"</span>
                        <h3>"Enter Address"</h3>
                        <p>"Simply enter the property address you want to analyze"</p>
                    </div>
                    <div class="step">
                        <span class="step-number">"2"</span>
                        <h3>"AI Analysis"</h3>
                        <p>"Our AI processes environmental data and climate models"</p>
                    </div>
                    <div class="step">
                        <span class="step-number">"3"</span>
                        <h3>"Get Report"</h3>
                        <p>"Receive a comprehensive risk assessment and recommendations"</p>
                    </div>
                </div>
                <div class="cta-row">
                    <A href="/report" class="btn primary">"Start Your Assessment"</A>
                </div>
            </section>

            <Footer/>
        </main>
    }
}
