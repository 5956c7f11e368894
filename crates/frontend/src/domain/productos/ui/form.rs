use contracts::domain::cliente::Cliente;
use contracts::domain::producto::{Producto, ProductoCreate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::clientes;
use crate::domain::productos::api;
use crate::shared::components::modal::Modal;
use crate::shared::components::ui::{Button, Checkbox, Input, Select, Textarea};

/// Editable form state, all fields as raw input strings.
#[derive(Clone, Default)]
struct FormData {
    nombre: String,
    descripcion: String,
    formato_lote: String,
    cliente_id: String,
    tipo_producto: String,
    color_banda: String,
    codigo_producto: String,
    densidad: String,
    bidon_proveedor: String,
    bidon_descripcion: String,
    tapa_proveedor: String,
    tapa_descripcion: String,
    pallet_proveedor: String,
    pallet_descripcion: String,
    cobertor_proveedor: String,
    cobertor_descripcion: String,
    funda_etiqueta_proveedor: String,
    funda_etiqueta_descripcion: String,
    esquinero_proveedor: String,
    esquinero_descripcion: String,
    litros_por_pallet: String,
    bidones_por_pallet: String,
    bidones_por_piso: String,
    unidad_medida: String,
    precio_unitario: String,
    anos_vencimiento: String,
    litros_por_unidad: String,
    activo: bool,
}

impl FormData {
    fn from_producto(p: &Producto) -> Self {
        let s = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            nombre: p.nombre.clone(),
            descripcion: s(&p.descripcion),
            formato_lote: s(&p.formato_lote),
            cliente_id: p.cliente_id.map(|id| id.to_string()).unwrap_or_default(),
            tipo_producto: s(&p.tipo_producto),
            color_banda: s(&p.color_banda),
            codigo_producto: s(&p.codigo_producto),
            densidad: p.densidad.map(|v| v.to_string()).unwrap_or_default(),
            bidon_proveedor: s(&p.bidon_proveedor),
            bidon_descripcion: s(&p.bidon_descripcion),
            tapa_proveedor: s(&p.tapa_proveedor),
            tapa_descripcion: s(&p.tapa_descripcion),
            pallet_proveedor: s(&p.pallet_proveedor),
            pallet_descripcion: s(&p.pallet_descripcion),
            cobertor_proveedor: s(&p.cobertor_proveedor),
            cobertor_descripcion: s(&p.cobertor_descripcion),
            funda_etiqueta_proveedor: s(&p.funda_etiqueta_proveedor),
            funda_etiqueta_descripcion: s(&p.funda_etiqueta_descripcion),
            esquinero_proveedor: s(&p.esquinero_proveedor),
            esquinero_descripcion: s(&p.esquinero_descripcion),
            litros_por_pallet: p.litros_por_pallet.map(|v| v.to_string()).unwrap_or_default(),
            bidones_por_pallet: p.bidones_por_pallet.map(|v| v.to_string()).unwrap_or_default(),
            bidones_por_piso: s(&p.bidones_por_piso),
            unidad_medida: s(&p.unidad_medida),
            precio_unitario: p.precio_unitario.map(|v| v.to_string()).unwrap_or_default(),
            anos_vencimiento: p.anos_vencimiento.map(|v| v.to_string()).unwrap_or_default(),
            litros_por_unidad: p.litros_por_unidad.map(|v| v.to_string()).unwrap_or_default(),
            activo: p.activo,
        }
    }

    fn to_dto(&self) -> ProductoCreate {
        let texto = |v: &str| Some(v.trim().to_string()).filter(|s| !s.is_empty());
        ProductoCreate {
            nombre: self.nombre.trim().to_string(),
            descripcion: texto(&self.descripcion),
            formato_lote: texto(&self.formato_lote),
            cliente_id: self.cliente_id.parse::<i64>().ok(),
            tipo_producto: texto(&self.tipo_producto),
            color_banda: texto(&self.color_banda),
            codigo_producto: texto(&self.codigo_producto),
            densidad: self.densidad.parse::<f64>().ok(),
            bidon_proveedor: texto(&self.bidon_proveedor),
            bidon_descripcion: texto(&self.bidon_descripcion),
            tapa_proveedor: texto(&self.tapa_proveedor),
            tapa_descripcion: texto(&self.tapa_descripcion),
            pallet_proveedor: texto(&self.pallet_proveedor),
            pallet_descripcion: texto(&self.pallet_descripcion),
            cobertor_proveedor: texto(&self.cobertor_proveedor),
            cobertor_descripcion: texto(&self.cobertor_descripcion),
            funda_etiqueta_proveedor: texto(&self.funda_etiqueta_proveedor),
            funda_etiqueta_descripcion: texto(&self.funda_etiqueta_descripcion),
            esquinero_proveedor: texto(&self.esquinero_proveedor),
            esquinero_descripcion: texto(&self.esquinero_descripcion),
            litros_por_pallet: self.litros_por_pallet.parse::<f64>().ok(),
            bidones_por_pallet: self.bidones_por_pallet.parse::<i64>().ok(),
            bidones_por_piso: texto(&self.bidones_por_piso),
            unidad_medida: texto(&self.unidad_medida),
            precio_unitario: self.precio_unitario.parse::<f64>().ok(),
            anos_vencimiento: self.anos_vencimiento.parse::<i32>().ok(),
            litros_por_unidad: self.litros_por_unidad.parse::<f64>().ok(),
            activo: Some(self.activo),
        }
    }
}

#[component]
pub fn ProductoForm(editando: Option<Producto>, on_close: Callback<bool>) -> impl IntoView {
    let producto_id = editando.as_ref().map(|p| p.id);
    let form: RwSignal<FormData> = RwSignal::new(
        editando
            .as_ref()
            .map(FormData::from_producto)
            .unwrap_or_else(|| FormData {
                activo: true,
                ..Default::default()
            }),
    );
    let clientes_activos: RwSignal<Vec<Cliente>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (guardando, set_guardando) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match clientes::api::list(&contracts::common::ListParams::activos(1000)).await {
                Ok(data) => clientes_activos.set(data.items),
                Err(e) => log::error!("No se pudieron cargar los clientes: {}", e),
            }
        });
    });

    let opciones_cliente = Signal::derive(move || {
        std::iter::once(("".to_string(), "Sin cliente".to_string()))
            .chain(
                clientes_activos
                    .get()
                    .iter()
                    .map(|c| (c.id.to_string(), format!("{} - {}", c.codigo, c.nombre))),
            )
            .collect::<Vec<_>>()
    });

    // One field-bound pair per input keeps the markup flat.
    macro_rules! campo {
        ($field:ident) => {{
            let value = Signal::derive(move || form.with(|f| f.$field.clone()));
            let on_input = Callback::new(move |v: String| form.update(|f| f.$field = v));
            (value, on_input)
        }};
    }

    let (nombre, on_nombre) = campo!(nombre);
    let (descripcion, on_descripcion) = campo!(descripcion);
    let (formato_lote, on_formato_lote) = campo!(formato_lote);
    let (cliente_id, on_cliente_id) = campo!(cliente_id);
    let (tipo_producto, on_tipo_producto) = campo!(tipo_producto);
    let (color_banda, on_color_banda) = campo!(color_banda);
    let (codigo_producto, on_codigo_producto) = campo!(codigo_producto);
    let (densidad, on_densidad) = campo!(densidad);
    let (bidon_proveedor, on_bidon_proveedor) = campo!(bidon_proveedor);
    let (bidon_descripcion, on_bidon_descripcion) = campo!(bidon_descripcion);
    let (tapa_proveedor, on_tapa_proveedor) = campo!(tapa_proveedor);
    let (tapa_descripcion, on_tapa_descripcion) = campo!(tapa_descripcion);
    let (pallet_proveedor, on_pallet_proveedor) = campo!(pallet_proveedor);
    let (pallet_descripcion, on_pallet_descripcion) = campo!(pallet_descripcion);
    let (cobertor_proveedor, on_cobertor_proveedor) = campo!(cobertor_proveedor);
    let (cobertor_descripcion, on_cobertor_descripcion) = campo!(cobertor_descripcion);
    let (funda_proveedor, on_funda_proveedor) = campo!(funda_etiqueta_proveedor);
    let (funda_descripcion, on_funda_descripcion) = campo!(funda_etiqueta_descripcion);
    let (esquinero_proveedor, on_esquinero_proveedor) = campo!(esquinero_proveedor);
    let (esquinero_descripcion, on_esquinero_descripcion) = campo!(esquinero_descripcion);
    let (litros_por_pallet, on_litros_por_pallet) = campo!(litros_por_pallet);
    let (bidones_por_pallet, on_bidones_por_pallet) = campo!(bidones_por_pallet);
    let (bidones_por_piso, on_bidones_por_piso) = campo!(bidones_por_piso);
    let (unidad_medida, on_unidad_medida) = campo!(unidad_medida);
    let (precio_unitario, on_precio_unitario) = campo!(precio_unitario);
    let (anos_vencimiento, on_anos_vencimiento) = campo!(anos_vencimiento);
    let (litros_por_unidad, on_litros_por_unidad) = campo!(litros_por_unidad);
    let activo = Signal::derive(move || form.with(|f| f.activo));

    let guardar = move |_| {
        let datos = form.with_untracked(|f| f.to_dto());
        if datos.nombre.is_empty() {
            set_error.set(Some("El nombre es obligatorio".to_string()));
            return;
        }
        set_guardando.set(true);
        set_error.set(None);

        spawn_local(async move {
            let resultado = match producto_id {
                Some(id) => api::update(id, &datos).await.map(|_| ()),
                None => api::create(&datos).await.map(|_| ()),
            };
            match resultado {
                Ok(()) => on_close.run(true),
                Err(e) => {
                    set_error.set(Some(e));
                    set_guardando.set(false);
                }
            }
        });
    };

    view! {
        <Modal
            title=if producto_id.is_some() { "Editar producto".to_string() } else { "Nuevo producto".to_string() }
            on_close=Callback::new(move |_| on_close.run(false))
        >
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <h4 class="form__section">"Datos generales"</h4>
            <div class="form__row">
                <Input label="Nombre" value=nombre on_input=on_nombre required=true />
                <Input label="Formato de lote" value=formato_lote on_input=on_formato_lote
                    placeholder="Ej: AF01-25" />
            </div>
            <Textarea label="Descripción" value=descripcion on_input=on_descripcion />
            <div class="form__row">
                <Select label="Cliente" value=cliente_id options=opciones_cliente on_change=on_cliente_id />
                <Input label="Tipo de producto" value=tipo_producto on_input=on_tipo_producto />
            </div>
            <div class="form__row">
                <Input label="Color de banda" value=color_banda on_input=on_color_banda />
                <Input label="Código externo" value=codigo_producto on_input=on_codigo_producto />
                <Input label="Densidad" input_type="number" value=densidad on_input=on_densidad />
            </div>

            <h4 class="form__section">"Envases"</h4>
            <div class="form__row">
                <Input label="Bidón - proveedor" value=bidon_proveedor on_input=on_bidon_proveedor />
                <Input label="Bidón - descripción" value=bidon_descripcion on_input=on_bidon_descripcion />
            </div>
            <div class="form__row">
                <Input label="Tapa - proveedor" value=tapa_proveedor on_input=on_tapa_proveedor />
                <Input label="Tapa - descripción" value=tapa_descripcion on_input=on_tapa_descripcion />
            </div>
            <div class="form__row">
                <Input label="Pallet - proveedor" value=pallet_proveedor on_input=on_pallet_proveedor />
                <Input label="Pallet - descripción" value=pallet_descripcion on_input=on_pallet_descripcion />
            </div>
            <div class="form__row">
                <Input label="Cobertor - proveedor" value=cobertor_proveedor on_input=on_cobertor_proveedor />
                <Input label="Cobertor - descripción" value=cobertor_descripcion on_input=on_cobertor_descripcion />
            </div>
            <div class="form__row">
                <Input label="Funda/Etiqueta - proveedor" value=funda_proveedor on_input=on_funda_proveedor />
                <Input label="Funda/Etiqueta - descripción" value=funda_descripcion on_input=on_funda_descripcion />
            </div>
            <div class="form__row">
                <Input label="Esquinero - proveedor" value=esquinero_proveedor on_input=on_esquinero_proveedor />
                <Input label="Esquinero - descripción" value=esquinero_descripcion on_input=on_esquinero_descripcion />
            </div>

            <h4 class="form__section">"Palletizado"</h4>
            <div class="form__row">
                <Input label="Litros por pallet" input_type="number" value=litros_por_pallet on_input=on_litros_por_pallet />
                <Input label="Bidones por pallet" input_type="number" value=bidones_por_pallet on_input=on_bidones_por_pallet />
                <Input label="Bidones por piso" value=bidones_por_piso on_input=on_bidones_por_piso />
            </div>

            <h4 class="form__section">"Otros"</h4>
            <div class="form__row">
                <Input label="Unidad de medida" value=unidad_medida on_input=on_unidad_medida />
                <Input label="Precio unitario" input_type="number" value=precio_unitario on_input=on_precio_unitario />
            </div>
            <div class="form__row">
                <Input label="Vencimiento (años)" input_type="number" value=anos_vencimiento on_input=on_anos_vencimiento />
                <Input label="Litros por unidad" input_type="number" value=litros_por_unidad on_input=on_litros_por_unidad />
            </div>
            <Checkbox label="Activo" checked=activo
                on_change=Callback::new(move |v| form.update(|f| f.activo = v)) />

            <div class="modal-footer">
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(false))>
                    "Cancelar"
                </Button>
                <Button on_click=Callback::new(guardar) disabled=Signal::derive(move || guardando.get())>
                    {move || if guardando.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            </div>
        </Modal>
    }
}
