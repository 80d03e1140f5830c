use leptos::*;
use leptos_router::A;

use crate::components::Footer;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="container about-page">
            <header>
                <h1>"About ClimateLens"</h1>
                <p class="tagline">
                    "Empowering property buyers with AI-powered climate risk insights to make "
                    "informed decisions for their future"
                </p>
            </header>

            <section class="about-grid">
                <div class="card">
                    <h3>"The Problem"</h3>
                    <p>
                        "Property buyers make one of their largest financial decisions without "
                        "knowing the climate risks that could affect their investment. Traditional "
                        "real estate doesn't provide comprehensive environmental risk assessments, "
                        "leaving buyers vulnerable to floods, fires, extreme heat, and poor air "
                        "quality."
                    </p>
                </div>
                <div class="card">
                    <h3>"Our Solution"</h3>
                    <p>
                        "ClimateLens provides clear, comprehensive climate risk reports that help "
                        "property buyers understand environmental challenges before they buy. Our "
                        "platform transforms complex climate data into actionable insights that "
                        "anyone can understand."
                    </p>
                </div>
                <div class="card">
                    <h3>"AI-Powered Analysis"</h3>
                    <p>
                        "Our platform will integrate with GPT-5 for intelligent summarization and "
                        "EnviroTrust for comprehensive climate data. This combination ensures "
                        "accurate, up-to-date risk assessments that account for both current "
                        "conditions and future projections."
                    </p>
                </div>
                <div class="card">
                    <h3>"Our Vision"</h3>
                    <p>
                        "We envision a future where every property transaction includes climate "
                        "risk transparency. By making environmental data accessible and "
                        "understandable, we help people make informed decisions that protect "
                        "their families and investments."
                    </p>
                </div>
            </section>

            <section class="stats card">
                <h2>"What Makes ClimateLens Different"</h2>
                <div class="stat-row">
                    <div class="stat">
                        <span class="stat-value">"5"</span>
                        <h3>"Risk Categories"</h3>
                        <p>"Comprehensive analysis of flood, fire, heat, air quality, and wind risks"</p>
                    </div>
                    <div class="stat">
                        <span class="stat-value">"AI"</span>
                        <h3>"Powered"</h3>
                        <p>"Advanced AI models process complex environmental data into clear insights"</p>
                    </div>
                    <div class="stat">
                        <span class="stat-value">"1"</span>
                        <h3>"Simple Report"</h3>
                        <p>"Easy-to-understand PDF reports you can share with anyone"</p>
                    </div>
                </div>
            </section>

            <section class="dev-note card">
                <h3>"Coming Soon"</h3>
                <p>
                    "ClimateLens is currently in development. The current version demonstrates "
                    "our vision with mock data. Full integration with GPT-5 summarization and "
                    "EnviroTrust climate data will provide real-time, accurate assessments for "
                    "any property address."
                </p>
                <p>
                    "Ready to try it? Head over to the "
                    <A href="/report">"report page"</A>
                    " and run an assessment."
                </p>
            </section>

            <Footer/>
        </main>
    }
}
