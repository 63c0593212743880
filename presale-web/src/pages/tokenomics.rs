//! Tokenomics panel

use leptos::prelude::*;
use lib_core::model::tokenomics::total_percent;
use lib_core::ALLOCATIONS;

#[component]
pub fn TokenomicsPage() -> impl IntoView {
    view! {
        <section class="panel">
            <h2>"Tokenomics"</h2>
            <p>"Fixed supply designed to support sustainable zero-interest lending."</p>
            <table class="allocation-table">
                <thead>
                    <tr><th>"Allocation"</th><th>"Share"</th></tr>
                </thead>
                <tbody>
                    {ALLOCATIONS
                        .iter()
                        .map(|allocation| view! {
                            <tr>
                                <td>{allocation.label}</td>
                                <td>{format!("{}%", allocation.percent)}</td>
                            </tr>
                        })
                        .collect::<Vec<_>>()}
                </tbody>
                <tfoot>
                    <tr><th>"Total"</th><th>{format!("{}%", total_percent(ALLOCATIONS))}</th></tr>
                </tfoot>
            </table>
        </section>
    }
}
