use crate::domain::models::reservation::Reservation;
use crate::error::AppError;
use chrono::{Datelike, NaiveDate};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 25.0;
const BODY_WIDTH_CHARS: usize = 72;

const MESES: [&str; 12] = [
    "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio", "Agosto", "Septiembre",
    "Octubre", "Noviembre", "Diciembre",
];

pub fn nombre_mes(mes: u32) -> &'static str {
    MESES[(mes as usize) - 1]
}

/// "03 de Enero de 2026", the dateline convention of a formal letter.
pub fn fecha_formal(fecha: NaiveDate) -> String {
    format!("{:02} de {} de {}", fecha.day(), nombre_mes(fecha.month()), fecha.year())
}

/// Renders the request letter for one reservation as PDF bytes, dated `hoy`.
pub fn render(reserva: &Reservation, hoy: NaiveDate) -> Result<Vec<u8>, AppError> {
    let (doc, page, layer) = PdfDocument::new(
        "Solicitud de uso de laboratorio",
        Mm(PAGE_WIDTH as _),
        Mm(PAGE_HEIGHT as _),
        "Capa 1",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_err)?;

    {
        let mut w = PageWriter {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            y: PAGE_HEIGHT - MARGIN,
        };

        w.line_right(&format!("Santa Cruz de la Sierra, {}", fecha_formal(hoy)), &regular, 11.0);
        w.skip(10.0);

        w.line("Señor:", &bold, 11.0, 5.0);
        w.line("M.Sc. Odin Rodriguez Mercado", &bold, 11.0, 5.0);
        w.line("DIRECTOR DE CARRERA", &regular, 11.0, 5.0);
        w.line("CIENCIA POLÍTICA Y ADM. PÚBLICA - UAGRM", &regular, 11.0, 5.0);
        w.line("Presente.-", &bold, 11.0, 5.0);
        w.skip(10.0);

        w.line_right("Ref.: SOLICITUD DE USO DE LABORATORIO", &bold, 12.0);
        w.skip(8.0);

        for parrafo in cuerpo(reserva) {
            if parrafo.is_empty() {
                w.skip(5.0);
                continue;
            }
            for linea in wrap(&parrafo, BODY_WIDTH_CHARS) {
                w.line(&linea, &regular, 12.0, 7.0);
            }
        }
        w.skip(30.0);

        w.line_centered("____________________________________", &regular, 11.0);
        w.line_centered(&reserva.nombre, &regular, 11.0);
        w.line_centered(&format!("C.I.: {}", reserva.ci), &regular, 11.0);
    }

    doc.save_to_bytes().map_err(pdf_err)
}

fn pdf_err(e: printpdf::Error) -> AppError {
    AppError::Letter(e.to_string())
}

fn cuerpo(reserva: &Reservation) -> Vec<String> {
    let texto = format!(
        "De mi mayor consideración:\n\
         \n\
         Mediante la presente, yo, {nombre}, con Registro Universitario N° {registro} y C.I. \
         {ci}, solicito a su autoridad la autorización para el uso del Laboratorio de Análisis \
         Político.\n\
         \n\
         La actividad a realizar es \"{tipo}\" con el siguiente propósito: {objetivo}.\n\
         \n\
         Detalles:\n\
         - Fecha: {fecha}\n\
         - Horario: De {inicio} a {fin}\n\
         - Participantes: {participantes}\n\
         \n\
         Me comprometo a hacer un uso responsable de los equipos e instalaciones.\n\
         \n\
         Sin otro particular, me despido atentamente.",
        nombre = reserva.nombre,
        registro = reserva.registro,
        ci = reserva.ci,
        tipo = reserva.tipo_actividad,
        objetivo = reserva.objetivo,
        fecha = reserva.fecha,
        inicio = reserva.hora_inicio,
        fin = reserva.hora_fin,
        participantes = reserva.participantes,
    );
    texto.lines().map(str::to_string).collect()
}

/// Greedy word wrap on a character count. Helvetica at letter sizes stays
/// inside the margins with the width used here.
fn wrap(texto: &str, ancho: usize) -> Vec<String> {
    let mut lineas = Vec::new();
    let mut actual = String::new();
    for palabra in texto.split_whitespace() {
        if !actual.is_empty() && actual.chars().count() + 1 + palabra.chars().count() > ancho {
            lineas.push(std::mem::take(&mut actual));
        }
        if !actual.is_empty() {
            actual.push(' ');
        }
        actual.push_str(palabra);
    }
    if !actual.is_empty() {
        lineas.push(actual);
    }
    lineas
}

/// Top-down text cursor over the document, opening a fresh page when the
/// cursor passes the bottom margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl PageWriter<'_> {
    fn line(&mut self, texto: &str, font: &IndirectFontRef, size: f32, leading: f32) {
        self.ensure_room(leading);
        self.layer.use_text(texto, size as _, Mm(MARGIN as _), Mm(self.y as _), font);
        self.y -= leading;
    }

    fn line_right(&mut self, texto: &str, font: &IndirectFontRef, size: f32) {
        self.ensure_room(5.0);
        let x = PAGE_WIDTH - MARGIN - estimated_width(texto, size);
        self.layer.use_text(texto, size as _, Mm(x as _), Mm(self.y as _), font);
        self.y -= 5.0;
    }

    fn line_centered(&mut self, texto: &str, font: &IndirectFontRef, size: f32) {
        self.ensure_room(5.0);
        let x = (PAGE_WIDTH - estimated_width(texto, size)) / 2.0;
        self.layer.use_text(texto, size as _, Mm(x as _), Mm(self.y as _), font);
        self.y -= 5.0;
    }

    fn skip(&mut self, alto: f32) {
        self.y -= alto;
    }

    fn ensure_room(&mut self, alto: f32) {
        if self.y - alto < MARGIN {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH as _), Mm(PAGE_HEIGHT as _), "Capa 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }
}

/// Average-glyph width estimate, points to millimeters. Only used for right
/// and center alignment, where a rough figure is enough.
fn estimated_width(texto: &str, size: f32) -> f32 {
    texto.chars().count() as f32 * size * 0.5 * 0.3528
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::reservation::ReservationStatus;

    fn reserva() -> Reservation {
        Reservation {
            id: 7,
            nombre: "Ana María Suárez".to_string(),
            registro: "217045678".to_string(),
            ci: "9876543 SC".to_string(),
            celular: "70012345".to_string(),
            email: "ana@uagrm.edu.bo".to_string(),
            responsable_actividad: "Ana María Suárez".to_string(),
            tipo_actividad: "Defensa de Tesis / Grado".to_string(),
            objetivo: "Defensa final de tesis de grado".to_string(),
            fecha: "2026-09-15".to_string(),
            hora_inicio: "09:00".to_string(),
            hora_fin: "11:00".to_string(),
            participantes: 12,
            estado: ReservationStatus::Pendiente,
        }
    }

    #[test]
    fn meses_localizados() {
        assert_eq!(nombre_mes(1), "Enero");
        assert_eq!(nombre_mes(9), "Septiembre");
        assert_eq!(nombre_mes(12), "Diciembre");
    }

    #[test]
    fn fecha_formal_con_dia_de_dos_digitos() {
        let fecha = NaiveDate::parse_from_str("2026-03-05", "%Y-%m-%d").unwrap();
        assert_eq!(fecha_formal(fecha), "05 de Marzo de 2026");
    }

    #[test]
    fn wrap_respeta_el_ancho() {
        let lineas = wrap("uno dos tres cuatro cinco seis", 12);
        assert!(lineas.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(lineas.join(" "), "uno dos tres cuatro cinco seis");
    }

    #[test]
    fn render_produce_un_pdf() {
        let hoy = NaiveDate::parse_from_str("2026-08-27", "%Y-%m-%d").unwrap();
        let bytes = render(&reserva(), hoy).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
