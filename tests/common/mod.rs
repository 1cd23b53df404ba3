//! In-memory .vsdx fixtures for the integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use vsdx::ooxml::opc::constants::relationship_type as rt;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const VISIO_NS: &str = r#"xmlns="http://schemas.microsoft.com/office/visio/2012/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#;
const RELS_NS: &str = r#"xmlns="http://schemas.openxmlformats.org/package/2006/relationships""#;

struct MasterFixture {
    id: u32,
    name_u: String,
    shape: String,
}

struct PageFixture {
    id: u32,
    name_u: String,
    sheet: String,
    contents: String,
}

/// Builder for a minimal but structurally complete Visio package.
pub struct VsdxBuilder {
    document_rel: bool,
    core: Option<String>,
    app: Option<String>,
    document_sheet: Option<String>,
    masters: Vec<MasterFixture>,
    pages: Vec<PageFixture>,
}

impl Default for VsdxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VsdxBuilder {
    pub fn new() -> Self {
        Self {
            document_rel: true,
            core: None,
            app: None,
            document_sheet: None,
            masters: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// Leave the document relationship out of the package rels.
    pub fn without_document_rel(mut self) -> Self {
        self.document_rel = false;
        self
    }

    /// Core properties body (elements inside `cp:coreProperties`).
    pub fn core(mut self, body: &str) -> Self {
        self.core = Some(body.to_string());
        self
    }

    /// Extended properties body (elements inside `Properties`).
    pub fn app(mut self, body: &str) -> Self {
        self.app = Some(body.to_string());
        self
    }

    /// Sections of the `DocumentSheet`.
    pub fn document_sheet(mut self, sections: &str) -> Self {
        self.document_sheet = Some(sections.to_string());
        self
    }

    /// A master whose contents part holds a single shape with `sections`.
    pub fn master(mut self, id: u32, name_u: &str, sections: &str) -> Self {
        self.masters.push(MasterFixture {
            id,
            name_u: name_u.to_string(),
            shape: format!(r#"<Shape ID="5" Type="Shape">{}</Shape>"#, sections),
        });
        self
    }

    /// A page with page sheet `sheet` and page contents body `contents`.
    pub fn page(mut self, id: u32, name_u: &str, sheet: &str, contents: &str) -> Self {
        self.pages.push(PageFixture {
            id,
            name_u: name_u.to_string(),
            sheet: sheet.to_string(),
            contents: contents.to_string(),
        });
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        let mut put = |name: &str, body: String| {
            zip.start_file(name, options).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        };

        put(
            "[Content_Types].xml",
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
</Types>"#
                .to_string(),
        );

        let mut root_rels = Vec::new();
        if self.document_rel {
            root_rels.push(rel("rId1", rt::DOCUMENT, "visio/document.xml"));
        }
        if let Some(core) = &self.core {
            root_rels.push(rel(
                "rId2",
                rt::CORE_PROPERTIES,
                "docProps/core.xml",
            ));
            put(
                "docProps/core.xml",
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">{}</cp:coreProperties>"#,
                    core
                ),
            );
        }
        if let Some(app) = &self.app {
            root_rels.push(rel(
                "rId3",
                rt::EXTENDED_PROPERTIES,
                "docProps/app.xml",
            ));
            put(
                "docProps/app.xml",
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">{}</Properties>"#,
                    app
                ),
            );
        }
        put("_rels/.rels", rels_xml(&root_rels));

        let document_sheet = self
            .document_sheet
            .as_ref()
            .map(|sections| format!("<DocumentSheet>{}</DocumentSheet>", sections))
            .unwrap_or_default();
        put(
            "visio/document.xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><VisioDocument {}>{}</VisioDocument>"#,
                VISIO_NS, document_sheet
            ),
        );

        let mut document_rels = vec![rel(
            "rId2",
            rt::PAGES,
            "pages/pages.xml",
        )];

        if !self.masters.is_empty() {
            document_rels.push(rel(
                "rId1",
                rt::MASTERS,
                "masters/masters.xml",
            ));

            let mut entries = String::new();
            let mut listing_rels = Vec::new();
            for (n, master) in self.masters.iter().enumerate() {
                let r_id = format!("rId{}", n + 1);
                let target = format!("master{}.xml", n + 1);
                entries.push_str(&format!(
                    r#"<Master ID="{}" Name="{}" NameU="{}"><Rel r:id="{}"/></Master>"#,
                    master.id, master.name_u, master.name_u, r_id
                ));
                listing_rels.push(rel(
                    &r_id,
                    rt::MASTER,
                    &target,
                ));
                put(
                    &format!("visio/masters/{}", target),
                    format!(
                        r#"<MasterContents {}><Shapes>{}</Shapes></MasterContents>"#,
                        VISIO_NS, master.shape
                    ),
                );
            }
            put(
                "visio/masters/masters.xml",
                format!(r#"<Masters {}>{}</Masters>"#, VISIO_NS, entries),
            );
            put("visio/masters/_rels/masters.xml.rels", rels_xml(&listing_rels));
        }
        put("visio/_rels/document.xml.rels", rels_xml(&document_rels));

        let mut entries = String::new();
        let mut listing_rels = Vec::new();
        for (n, page) in self.pages.iter().enumerate() {
            let r_id = format!("rId{}", n + 1);
            let target = format!("page{}.xml", n + 1);
            entries.push_str(&format!(
                r#"<Page ID="{}" Name="{}" NameU="{}"><PageSheet>{}</PageSheet><Rel r:id="{}"/></Page>"#,
                page.id, page.name_u, page.name_u, page.sheet, r_id
            ));
            listing_rels.push(rel(
                &r_id,
                rt::PAGE,
                &target,
            ));
            put(
                &format!("visio/pages/{}", target),
                format!(r#"<PageContents {}>{}</PageContents>"#, VISIO_NS, page.contents),
            );
        }
        put(
            "visio/pages/pages.xml",
            format!(r#"<Pages {}>{}</Pages>"#, VISIO_NS, entries),
        );
        put("visio/pages/_rels/pages.xml.rels", rels_xml(&listing_rels));

        zip.finish().unwrap().into_inner()
    }
}

fn rel(id: &str, reltype: &str, target: &str) -> String {
    format!(r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#, id, reltype, target)
}

fn rels_xml(rels: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><Relationships {}>{}</Relationships>"#,
        RELS_NS,
        rels.concat()
    )
}

/// A network drawing exercising inheritance, layers, connects and properties.
///
/// Master 1 (`Router`) carries user row `Kind` and shape data `Cost`/`Owner`.
/// Page 0 holds:
/// - shape 1: router instance without own rows
/// - shape 2: router instance overriding `Cost`, deleting `Owner`, adding `Serial`
/// - shape 3: instance of unknown master 99
/// - shape 4: plain shape without master
/// - a connector (shape 10) glued between shapes 1 and 2
///
/// Page 1 is empty.
pub fn network_drawing() -> Vec<u8> {
    VsdxBuilder::new()
        .core(
            r#"<dc:title>Office network</dc:title>
               <dc:creator>Infra</dc:creator>
               <dcterms:created xsi:type="dcterms:W3CDTF">2024-01-02T03:04:05Z</dcterms:created>"#,
        )
        .app("<Company>Acme</Company><AppVersion>16.0000</AppVersion>")
        .document_sheet(r#"<Section N="User"><Row N="Revision"><Cell N="Value" V="7"/></Row></Section>"#)
        .master(
            1,
            "Router",
            r#"<Section N="User"><Row N="Kind"><Cell N="Value" V="router"/></Row></Section>
               <Section N="Property">
                 <Row N="Cost"><Cell N="Label" V="Cost"/><Cell N="Type" V="2"/><Cell N="Value" V="100"/></Row>
                 <Row N="Owner"><Cell N="Label" V="Owner"/><Cell N="Value" V="ops"/></Row>
               </Section>"#,
        )
        .page(
            0,
            "Floor1",
            r#"<Section N="Layer">
                 <Row IX="0"><Cell N="Name" V="Connector"/><Cell N="NameUniv" V="Connector"/><Cell N="Visible" V="1"/><Cell N="Print" V="1"/><Cell N="Color" V="255"/></Row>
                 <Row IX="1"><Cell N="Name" V="Network"/><Cell N="Visible" V="0"/><Cell N="Lock" V="1"/><Cell N="ColorTrans" V="0.5"/></Row>
               </Section>
               <Section N="Property"><Row N="Site"><Cell N="Value" V="HQ"/></Row></Section>"#,
            r#"<Shapes>
                 <Shape ID="1" NameU="Router" Name="Router" Master="1"><Text>core-1</Text></Shape>
                 <Shape ID="2" NameU="Router.2" Name="Router.2" Master="1">
                   <Section N="Property">
                     <Row N="Cost"><Cell N="Value" V="250"/></Row>
                     <Row N="Owner" Del="1"/>
                     <Row N="Serial"><Cell N="Value" V="SN-2"/></Row>
                   </Section>
                   <Text>edge-<cp IX="0"/>2</Text>
                 </Shape>
                 <Shape ID="3" NameU="Ghost" Master="99">
                   <Section N="User"><Row N="Tag"><Cell N="Value" V="g"/></Row></Section>
                 </Shape>
                 <Shape ID="4" NameU="Note"><Text>plain &amp; simple</Text></Shape>
                 <Shape ID="10" NameU="Dynamic connector"/>
               </Shapes>
               <Connects>
                 <Connect FromSheet="10" FromCell="BeginX" FromPart="9" ToSheet="1" ToCell="PinX" ToPart="3"/>
                 <Connect FromSheet="10" FromCell="EndX" FromPart="12" ToSheet="2" ToCell="PinX" ToPart="3"/>
               </Connects>"#,
        )
        .page(1, "Empty", "", "")
        .build()
}
