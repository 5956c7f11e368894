use contracts::domain::lote::AdvertenciaLote;
use leptos::prelude::*;

use crate::shared::components::modal::Modal;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

/// Interstitial confirmation for flagged anomalies. The save only proceeds
/// when the operator explicitly confirms; cancel returns to the form with
/// its input intact.
#[component]
pub fn AdvertenciasModal(
    advertencias: Vec<AdvertenciaLote>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal
            title="Advertencias detectadas".to_string()
            on_close=Callback::new(move |_| on_cancel.run(()))
        >
            <p class="warning-intro">
                {icon("alert-triangle")}
                " El lote no se guardó. Revise las advertencias y confirme si desea continuar."
            </p>
            <ul class="warning-list">
                {advertencias
                    .into_iter()
                    .map(|a| view! {
                        <li class="warning-item">
                            <strong>{a.tipo.label()}</strong>
                            <p>{a.mensaje}</p>
                            {a.detalle.map(|d| view! { <p class="warning-detail">{d}</p> })}
                        </li>
                    })
                    .collect_view()}
            </ul>
            <div class="modal-footer">
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancelar"
                </Button>
                <Button variant="danger" on_click=Callback::new(move |_| on_confirm.run(()))>
                    "Guardar de todos modos"
                </Button>
            </div>
        </Modal>
    }
}
