pub mod auditoria;
pub mod clientes;
pub mod estados_linea;
pub mod historial;
pub mod lineas;
pub mod lotes;
pub mod productos;
pub mod sectores;
pub mod timeline;
