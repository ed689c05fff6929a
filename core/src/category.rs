/// Closed set of linear-structure categories the selector can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Lists,
    Stacks,
    Queues,
}

/// Header description and info-panel content for one category. The body
/// is trusted markup rendered into the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryConfig {
    pub description: &'static str,
    pub info_title: &'static str,
    pub info_body: &'static str,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Lists, Category::Stacks, Category::Queues];

    /// Element-id fragment used by the selector and the content sections
    /// (`{id}-content`).
    pub const fn id(self) -> &'static str {
        match self {
            Category::Lists => "listas",
            Category::Stacks => "pilas",
            Category::Queues => "colas",
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|cat| cat.id() == id)
    }

    pub const fn config(self) -> CategoryConfig {
        match self {
            Category::Lists => CategoryConfig {
                description: "Selecciona una lista enlazada para comenzar",
                info_title: "Acerca de las Listas Enlazadas",
                info_body: "\
<p>Las listas enlazadas son estructuras de datos lineales donde los elementos se conectan mediante punteros.</p>\
<ul style=\"text-align: left; margin-top: 1rem;\">\
<li><strong>Lista Simple:</strong> Ideal para inserción frecuente al final</li>\
<li><strong>Lista Doble:</strong> Mejor para navegación bidireccional</li>\
<li><strong>Lista Circular:</strong> Perfecta para algoritmos de Round Robin</li>\
</ul>",
            },
            Category::Stacks => CategoryConfig {
                description: "Selecciona una implementación de pila para comenzar",
                info_title: "Acerca de las Pilas",
                info_body: "\
<p>Las pilas son estructuras de datos LIFO (Last In, First Out) donde el último elemento añadido es el primero en salir.</p>\
<ul style=\"text-align: left; margin-top: 1rem;\">\
<li><strong>Pila con Lista:</strong> Implementación dinámica usando lista enlazada</li>\
<li><strong>Pila con Arreglo:</strong> Implementación estática usando arreglo (próximamente)</li>\
</ul>",
            },
            Category::Queues => CategoryConfig {
                description: "Selecciona una implementación de cola para comenzar",
                info_title: "Acerca de las Colas",
                info_body: "\
<p>Las colas son estructuras de datos FIFO (First In, First Out) donde el primer elemento añadido es el primero en salir.</p>\
<ul style=\"text-align: left; margin-top: 1rem;\">\
<li><strong>Cola Simple:</strong> Implementación básica FIFO (próximamente)</li>\
<li><strong>Cola Circular:</strong> Optimiza el uso de memoria (próximamente)</li>\
<li><strong>Cola de Prioridad:</strong> Elementos ordenados por prioridad (próximamente)</li>\
</ul>",
            },
        }
    }
}
