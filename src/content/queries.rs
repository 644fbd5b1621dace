//! GROQ queries
//!
//! One builder per content type. Projections rename store fields only where
//! the store nests them (asset URLs, references); everything else keeps the
//! store's own field names so models deserialize them directly.

use serde_json::Value;
use std::collections::BTreeMap;

/// A GROQ query with its named parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Short name used in logs
    pub label: &'static str,
    pub groq: String,
    pub params: BTreeMap<String, Value>,
}

impl Query {
    pub fn new(label: &'static str, groq: impl Into<String>) -> Self {
        Self {
            label,
            groq: groq.into(),
            params: BTreeMap::new(),
        }
    }

    /// Bind `$name` to a JSON value
    pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }

    /// Key identifying this exact query, parameters included
    pub fn cache_key(&self) -> String {
        let mut key = self.groq.clone();
        for (name, value) in &self.params {
            key.push_str("\n$");
            key.push_str(name);
            key.push('=');
            key.push_str(&value.to_string());
        }
        key
    }
}

pub fn pastors() -> Query {
    Query::new(
        "pastores",
        r#"*[_type == "pastor"] | order(ordem asc) {
  _id, nome, cargo, atual, dataEntrada, dataSaida, biografia, ordem, slug,
  "imagemUrl": foto.asset->url
}"#,
    )
}

pub fn pastor_by_slug(slug: &str) -> Query {
    Query::new(
        "pastor",
        r#"*[_type == "pastor" && slug.current == $slug][0] {
  _id, nome, cargo, atual, dataEntrada, dataSaida, biografia, biografiaDetalhada,
  email, telefone, redesSociais[] { plataforma, url }, ordem, slug,
  "imagemUrl": foto.asset->url
}"#,
    )
    .param("slug", slug)
}

pub fn ministries() -> Query {
    Query::new(
        "ministerios",
        r#"*[_type == "ministerio"] | order(nome asc) {
  _id, nome, descricao, lider,
  "imagemUrl": imagem.asset->url
}"#,
    )
}

pub fn events() -> Query {
    Query::new(
        "eventos",
        r#"*[_type == "evento"] | order(data desc) {
  _id, titulo, data, dataFim, descricao, local, destaque,
  "imagemUrl": imagem.asset->url
}"#,
    )
}

pub fn gallery() -> Query {
    Query::new(
        "galeria",
        r#"*[_type == "galeriaItem"] | order(_createdAt desc) {
  _id, titulo, descricao, tipoMidia,
  "imagemUrl": imagem.asset->url,
  "videoUrl": coalesce(videoUrl, video.asset->url)
}"#,
    )
}

pub fn writings() -> Query {
    Query::new(
        "conteudos",
        r#"*[_type == "artigo" || _type == "sermaoEscrito"] | order(coalesce(dataPublicacao, data) desc) {
  _id, titulo, resumo, slug,
  "autor": select(_type == "artigo" => autor, _type == "sermaoEscrito" => pregador),
  "dataPublicacao": select(_type == "artigo" => dataPublicacao, _type == "sermaoEscrito" => data),
  "imagemPrincipalUrl": select(_type == "artigo" => imagemPrincipal.asset->url, _type == "sermaoEscrito" => null),
  "tipo": select(_type == "artigo" => "artigo", _type == "sermaoEscrito" => "sermao")
}"#,
    )
}

pub fn recent_articles(limit: usize) -> Query {
    Query::new(
        "artigos recentes",
        format!(
            r#"*[_type == "artigo"] | order(_createdAt desc) [0...{limit}] {{
  _id, titulo, resumo, slug, autor, dataPublicacao,
  "imagemPrincipalUrl": imagemPrincipal.asset->url,
  "tipo": "artigo"
}}"#
        ),
    )
}

pub fn article_by_slug(slug: &str) -> Query {
    Query::new(
        "artigo",
        r#"*[_type == "artigo" && slug.current == $slug][0] {
  _id, titulo, autor, dataPublicacao, resumo, conteudo, slug,
  "imagemPrincipalUrl": imagemPrincipal.asset->url,
  "tipo": "artigo"
}"#,
    )
    .param("slug", slug)
}

pub fn sermon_by_slug(slug: &str) -> Query {
    Query::new(
        "sermao",
        r#"*[_type == "sermaoEscrito" && slug.current == $slug][0] {
  _id, titulo, resumo, conteudo, slug,
  "autor": pregador,
  "dataPublicacao": data,
  "tipo": "sermao"
}"#,
    )
    .param("slug", slug)
}

/// Lives and podcasts, newest first, optionally restricted to featured ones
pub fn broadcasts(limit: usize, featured_only: bool) -> Query {
    let featured = if featured_only { " && destaque == true" } else { "" };
    Query::new(
        "lives e podcasts",
        format!(
            r#"*[_type == "livesPodcasts"{featured}] | order(dataHora desc) [0...{limit}] {{
  _id, titulo, slug, tipo, descricao, dataHora, status,
  urlYoutube, urlSpotify, urlOutrasPlataformas,
  pastor->{{ nome, slug }},
  tags, destaque, duracao,
  "imagemCapaUrl": imagemCapa.asset->url
}}"#
        ),
    )
}

pub fn banners() -> Query {
    Query::new(
        "banners",
        r#"*[_type == "banner"] | order(_createdAt desc) {
  _id, titulo, descricao, link,
  "imagemUrl": imagem.asset->url
}"#,
    )
}

pub fn news() -> Query {
    Query::new(
        "noticias",
        r#"*[_type == "noticia"] | order(dataPublicacao desc) {
  _id, titulo, resumo, dataPublicacao, slug,
  "imagemPrincipalUrl": imagemPrincipal.asset->url
}"#,
    )
}

/// Members born in `month`, a two-digit month number
pub fn birthdays(month: &str) -> Query {
    Query::new(
        "aniversariantes",
        r#"*[_type == "aniversariante" && dateTime::string(dataNascimento).substring(5, 7) == $mesAtual] | order(dateTime::string(dataNascimento).substring(8, 10) asc) {
  _id, nome, dataNascimento
}"#,
    )
    .param("mesAtual", month)
}

pub fn settings() -> Query {
    Query::new(
        "configuracoes gerais",
        r#"*[_type == "configuracoesGerais"][0] {
  endereco, cep, telefonePrincipal, emailContato, linkMapa,
  "redesSociais": redesSociais[] { plataforma, url },
  "horariosCultos": horariosCultos[] { diaSemana, horario, descricaoCulto }
}"#,
    )
}
